//! Query parameters for collection requests.
//!
//! Filters are kept under their Rust names and translated to the API's
//! PascalCase wire names only when a request is built. Unset filters never
//! reach the query string.

/// Anything that contributes query parameters to a list request.
pub trait QueryParams {
    /// `(wire name, value)` pairs for every parameter that is set.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Collections without filters.
impl QueryParams for () {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Filters for the available-phone-number search (local and toll-free).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberSearch {
    pub area_code: Option<u32>,
    /// Digits or letters the number must contain; `*` matches any digit.
    pub contains: Option<String>,
    pub starts_with: Option<String>,
    pub ends_with: Option<String>,
    pub sms_enabled: Option<bool>,
    pub mms_enabled: Option<bool>,
    pub voice_enabled: Option<bool>,
    pub exclude_all_address_required: Option<bool>,
    pub exclude_local_address_required: Option<bool>,
    pub exclude_foreign_address_required: Option<bool>,
    pub beta: Option<bool>,
    pub near_number: Option<String>,
    /// `lat,long` pair.
    pub near_lat_long: Option<String>,
    /// Radius in miles for the near-number / near-lat-long filters.
    pub distance: Option<u32>,
    pub in_postal_code: Option<String>,
    pub in_region: Option<String>,
    pub in_rate_center: Option<String>,
    pub in_lata: Option<String>,
    pub in_locality: Option<String>,
    pub fax_enabled: Option<bool>,
}

impl NumberSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area_code(mut self, area_code: u32) -> Self {
        self.area_code = Some(area_code);
        self
    }

    pub fn contains(mut self, pattern: impl Into<String>) -> Self {
        self.contains = Some(pattern.into());
        self
    }

    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = Some(prefix.into());
        self
    }

    pub fn ends_with(mut self, suffix: impl Into<String>) -> Self {
        self.ends_with = Some(suffix.into());
        self
    }

    pub fn sms_enabled(mut self, enabled: bool) -> Self {
        self.sms_enabled = Some(enabled);
        self
    }

    pub fn mms_enabled(mut self, enabled: bool) -> Self {
        self.mms_enabled = Some(enabled);
        self
    }

    pub fn voice_enabled(mut self, enabled: bool) -> Self {
        self.voice_enabled = Some(enabled);
        self
    }

    pub fn fax_enabled(mut self, enabled: bool) -> Self {
        self.fax_enabled = Some(enabled);
        self
    }

    pub fn exclude_all_address_required(mut self, exclude: bool) -> Self {
        self.exclude_all_address_required = Some(exclude);
        self
    }

    pub fn exclude_local_address_required(mut self, exclude: bool) -> Self {
        self.exclude_local_address_required = Some(exclude);
        self
    }

    pub fn exclude_foreign_address_required(mut self, exclude: bool) -> Self {
        self.exclude_foreign_address_required = Some(exclude);
        self
    }

    pub fn beta(mut self, include: bool) -> Self {
        self.beta = Some(include);
        self
    }

    pub fn near_number(mut self, number: impl Into<String>) -> Self {
        self.near_number = Some(number.into());
        self
    }

    pub fn near_lat_long(mut self, lat_long: impl Into<String>) -> Self {
        self.near_lat_long = Some(lat_long.into());
        self
    }

    pub fn distance(mut self, miles: u32) -> Self {
        self.distance = Some(miles);
        self
    }

    pub fn in_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.in_postal_code = Some(postal_code.into());
        self
    }

    pub fn in_region(mut self, region: impl Into<String>) -> Self {
        self.in_region = Some(region.into());
        self
    }

    pub fn in_rate_center(mut self, rate_center: impl Into<String>) -> Self {
        self.in_rate_center = Some(rate_center.into());
        self
    }

    pub fn in_lata(mut self, lata: impl Into<String>) -> Self {
        self.in_lata = Some(lata.into());
        self
    }

    pub fn in_locality(mut self, locality: impl Into<String>) -> Self {
        self.in_locality = Some(locality.into());
        self
    }
}

impl QueryParams for NumberSearch {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "AreaCode", &self.area_code);
        push(&mut pairs, "Contains", &self.contains);
        push(&mut pairs, "StartsWith", &self.starts_with);
        push(&mut pairs, "EndsWith", &self.ends_with);
        push(&mut pairs, "SmsEnabled", &self.sms_enabled);
        push(&mut pairs, "MmsEnabled", &self.mms_enabled);
        push(&mut pairs, "VoiceEnabled", &self.voice_enabled);
        push(&mut pairs, "ExcludeAllAddressRequired", &self.exclude_all_address_required);
        push(&mut pairs, "ExcludeLocalAddressRequired", &self.exclude_local_address_required);
        push(&mut pairs, "ExcludeForeignAddressRequired", &self.exclude_foreign_address_required);
        push(&mut pairs, "Beta", &self.beta);
        push(&mut pairs, "NearNumber", &self.near_number);
        push(&mut pairs, "NearLatLong", &self.near_lat_long);
        push(&mut pairs, "Distance", &self.distance);
        push(&mut pairs, "InPostalCode", &self.in_postal_code);
        push(&mut pairs, "InRegion", &self.in_region);
        push(&mut pairs, "InRateCenter", &self.in_rate_center);
        push(&mut pairs, "InLata", &self.in_lata);
        push(&mut pairs, "InLocality", &self.in_locality);
        push(&mut pairs, "FaxEnabled", &self.fax_enabled);
        pairs
    }
}

/// Explicit paging controls for a single page request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Opaque cursor handed out by the API.
    pub page_token: Option<String>,
    /// Page number; client-side bookkeeping for the API.
    pub page_number: Option<u32>,
    /// Records per page; the API defaults to 50.
    pub page_size: Option<u32>,
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    pub fn page_number(mut self, page: u32) -> Self {
        self.page_number = Some(page);
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }
}

impl QueryParams for PageOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "PageToken", &self.page_token);
        push(&mut pairs, "Page", &self.page_number);
        push(&mut pairs, "PageSize", &self.page_size);
        pairs
    }
}

fn push<T: ToString>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<T>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}
