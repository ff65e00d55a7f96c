//! Available-phone-number search: filters on the wire, paging and limits.

use crate::integration::mock_server::{MockServerFixture, PROJECT_ID};
use futures::{StreamExt, TryStreamExt};
use mockito::Matcher;
use serde_json::json;
use signalwire_rest::{NumberSearch, PageOptions};

fn local_path() -> String {
    format!("/2010-04-01/Accounts/{PROJECT_ID}/AvailablePhoneNumbers/US/Local.json")
}

fn number(phone: &str) -> serde_json::Value {
    json!({
        "friendly_name": phone,
        "phone_number": phone,
        "lata": "722",
        "locality": "Oakland",
        "rate_center": "OKLD",
        "latitude": "37.7749295",
        "longitude": "-122.2711",
        "region": "CA",
        "postal_code": "94610",
        "iso_country": "US",
        "beta": false,
        "capabilities": {"voice": true, "SMS": true, "MMS": false}
    })
}

fn page_body(phones: &[&str], next_token: Option<&str>) -> String {
    let next = next_token.map(|token| format!("{}?PageSize=2&Page=1&PageToken={token}", local_path()));
    json!({
        "uri": local_path(),
        "page": 0,
        "page_size": 2,
        "next_page_uri": next,
        "available_phone_numbers": phones.iter().map(|p| number(p)).collect::<Vec<_>>()
    })
    .to_string()
}

#[tokio::test]
async fn page_sends_only_set_filters() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_get(
            &local_path(),
            Matcher::Exact("AreaCode=510&SmsEnabled=true&InLata=722&PageSize=2".into()),
            200,
            &page_body(&["+15105550100", "+15105550101"], None),
            1,
        )
        .await;

    let search = NumberSearch::new().area_code(510).sms_enabled(true).in_lata("722");
    let page = fixture
        .client()
        .api()
        .available_phone_numbers("US")
        .local()
        .page(&search, PageOptions::new().page_size(2))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.len(), 2);
    let first = &page.records()[0];
    assert_eq!(first.text("locality"), Some("Oakland"));
    assert_eq!(first.decimal("latitude").unwrap().to_string(), "37.7749295");
    assert_eq!(first.solution().get("country_code"), Some("US"));
    assert_eq!(first.solution().get("account_sid"), Some(PROJECT_ID));
}

#[tokio::test]
async fn list_stops_at_limit_without_extra_requests() {
    let fixture = MockServerFixture::new().await;
    let first = fixture
        .mock_get(
            &local_path(),
            Matcher::Exact("AreaCode=510&PageSize=2".into()),
            200,
            &page_body(&["+15105550100", "+15105550101"], Some("PT2")),
            1,
        )
        .await;
    let second = fixture
        .mock_get(
            &local_path(),
            Matcher::Exact("PageSize=2&Page=1&PageToken=PT2".into()),
            200,
            &page_body(&["+15105550102", "+15105550103"], Some("PT3")),
            1,
        )
        .await;
    let third = fixture
        .mock_get(
            &local_path(),
            Matcher::UrlEncoded("PageToken".into(), "PT3".into()),
            200,
            &page_body(&["+15105550104"], None),
            0,
        )
        .await;

    let numbers = fixture
        .client()
        .api()
        .available_phone_numbers("US")
        .local()
        .list(&NumberSearch::new().area_code(510), Some(3), Some(2))
        .await
        .unwrap();

    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
    let phones: Vec<_> = numbers.iter().filter_map(|n| n.text("phone_number")).collect();
    assert_eq!(phones, ["+15105550100", "+15105550101", "+15105550102"]);
}

#[tokio::test]
async fn small_limit_is_one_request_sized_to_the_limit() {
    let fixture = MockServerFixture::new().await;
    let only = fixture
        .mock_get(
            &local_path(),
            Matcher::Exact("PageSize=1".into()),
            200,
            &page_body(&["+15105550100"], Some("PT2")),
            1,
        )
        .await;

    let numbers = fixture
        .client()
        .api()
        .available_phone_numbers("US")
        .local()
        .list(&NumberSearch::new(), Some(1), None)
        .await
        .unwrap();

    only.assert_async().await;
    assert_eq!(numbers.len(), 1);
}

#[tokio::test]
async fn zero_limit_sends_nothing() {
    let fixture = MockServerFixture::new().await;
    let never = fixture
        .mock_get(&local_path(), Matcher::Any, 200, &page_body(&[], None), 0)
        .await;

    let numbers = fixture
        .client()
        .api()
        .available_phone_numbers("US")
        .local()
        .list(&NumberSearch::new(), Some(0), None)
        .await
        .unwrap();

    never.assert_async().await;
    assert!(numbers.is_empty());
}

#[tokio::test]
async fn stream_fetches_pages_only_when_needed() {
    let fixture = MockServerFixture::new().await;
    let first = fixture
        .mock_get(
            &local_path(),
            Matcher::Exact("PageSize=2".into()),
            200,
            &page_body(&["+15105550100", "+15105550101"], Some("PT2")),
            1,
        )
        .await;
    let second = fixture
        .mock_get(
            &local_path(),
            Matcher::UrlEncoded("PageToken".into(), "PT2".into()),
            200,
            &page_body(&["+15105550102"], None),
            0,
        )
        .await;

    let numbers = fixture.client().api().available_phone_numbers("US").local();
    let head: Vec<_> = numbers
        .stream(&NumberSearch::new(), None, Some(2))
        .take(2)
        .try_collect()
        .await
        .unwrap();

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(head.len(), 2);
}

#[tokio::test]
async fn unbounded_stream_follows_next_page_uri_to_the_end() {
    let fixture = MockServerFixture::new().await;
    let _first = fixture
        .mock_get(
            &local_path(),
            Matcher::Exact("PageSize=2".into()),
            200,
            &page_body(&["+15105550100", "+15105550101"], Some("PT2")),
            1,
        )
        .await;
    let _second = fixture
        .mock_get(
            &local_path(),
            Matcher::UrlEncoded("PageToken".into(), "PT2".into()),
            200,
            &page_body(&["+15105550102"], None),
            1,
        )
        .await;

    let all = fixture
        .client()
        .api()
        .available_phone_numbers("US")
        .local()
        .list(&NumberSearch::new(), None, Some(2))
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn toll_free_search_uses_its_own_path() {
    let fixture = MockServerFixture::new().await;
    let path = format!("/2010-04-01/Accounts/{PROJECT_ID}/AvailablePhoneNumbers/US/TollFree.json");
    let body = json!({
        "uri": path,
        "available_phone_numbers": [number("+18005550100")]
    })
    .to_string();
    let mock = fixture
        .mock_get(&path, Matcher::Exact("Contains=555".into()), 200, &body, 1)
        .await;

    let page = fixture
        .client()
        .api()
        .available_phone_numbers("US")
        .toll_free()
        .page(&NumberSearch::new().contains("555"), PageOptions::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.records()[0].kind(), "available_phone_number_toll_free");
}

#[tokio::test]
async fn page_cursors_walk_forward_to_the_end_and_back() {
    let fixture = MockServerFixture::new().await;
    let first = fixture
        .mock_get(
            &local_path(),
            Matcher::Exact("PageSize=2".into()),
            200,
            &page_body(&["+15105550100", "+15105550101"], Some("PT2")),
            1,
        )
        .await;
    let last_body = json!({
        "uri": local_path(),
        "page": 1,
        "page_size": 2,
        "next_page_uri": null,
        "previous_page_uri": format!("{}?PageSize=2&Page=0&PageToken=PT1", local_path()),
        "available_phone_numbers": [number("+15105550102")]
    })
    .to_string();
    let second = fixture
        .mock_get(
            &local_path(),
            Matcher::UrlEncoded("PageToken".into(), "PT2".into()),
            200,
            &last_body,
            1,
        )
        .await;
    let back = fixture
        .mock_get(
            &local_path(),
            Matcher::UrlEncoded("PageToken".into(), "PT1".into()),
            200,
            &page_body(&["+15105550100", "+15105550101"], Some("PT2")),
            1,
        )
        .await;

    let local = fixture.client().api().available_phone_numbers("US").local();
    let page = local
        .page(&NumberSearch::new(), PageOptions::new().page_size(2))
        .await
        .unwrap();
    assert_eq!(page.previous_page().await.unwrap().map(|p| p.len()), None);

    let last = page.next_page().await.unwrap().expect("second page");
    assert_eq!(last.records()[0].text("phone_number"), Some("+15105550102"));
    assert_eq!(last.page_number(), Some(1));
    assert!(last.next_page().await.unwrap().is_none());

    let again = last.previous_page().await.unwrap().expect("first page again");
    assert_eq!(again.len(), 2);

    first.assert_async().await;
    second.assert_async().await;
    back.assert_async().await;
}
