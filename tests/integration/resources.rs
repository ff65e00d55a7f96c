//! Single-resource fetches, collection listing and error replies.

use crate::integration::mock_server::{MockServerFixture, PROJECT_ID};
use mockito::Matcher;
use serde_json::json;
use signalwire_rest::{Error, FieldValue, PageOptions};

const BASIC_AUTH: &str = "Basic UEowMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwOnNlY3JldC10b2tlbg==";

fn recording(sid: &str) -> serde_json::Value {
    json!({
        "account_sid": PROJECT_ID,
        "api_version": "2010-04-01",
        "call_sid": "CA0001",
        "conference_sid": null,
        "date_created": "Fri, 14 Oct 2016 21:56:34 +0000",
        "date_updated": "Fri, 14 Oct 2016 21:56:38 +0000",
        "start_time": "Fri, 14 Oct 2016 21:56:34 +0000",
        "duration": "4",
        "sid": sid,
        "price": "-0.0025",
        "price_unit": "USD",
        "status": "completed",
        "source": "RecordVerb",
        "error_code": null,
        "uri": format!("/2010-04-01/Accounts/{PROJECT_ID}/Recordings/{sid}.json")
    })
}

#[tokio::test]
async fn fetch_recording_sends_basic_auth_and_defaults_optional_fields() {
    let fixture = MockServerFixture::new().await;
    let path = format!("/2010-04-01/Accounts/{PROJECT_ID}/Recordings/RE0001.json");
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("GET", path.as_str())
            .match_header("authorization", BASIC_AUTH)
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(recording("RE0001").to_string())
            .create_async()
            .await
    };

    let instance = fixture.client().api().recording("RE0001").fetch().await.unwrap();

    mock.assert_async().await;
    assert_eq!(instance.sid(), Some("RE0001"));
    assert_eq!(instance.integer("channels"), Some(1));
    assert_eq!(instance.text("encryption_details"), Some(""));
    assert_eq!(instance.decimal("price").unwrap().to_string(), "-0.0025");
    assert!(instance.get("error_code").unwrap().is_null());
    assert_eq!(instance.solution().get("account_sid"), Some(PROJECT_ID));
}

#[tokio::test]
async fn fetch_own_account() {
    let fixture = MockServerFixture::new().await;
    let body = json!({
        "auth_token": "redacted",
        "date_created": "Tue, 31 Aug 2010 20:36:28 +0000",
        "date_updated": "Tue, 31 Aug 2010 20:36:44 +0000",
        "friendly_name": "Main project",
        "sid": PROJECT_ID,
        "status": "active",
        "subresource_uris": {"recordings": format!("/2010-04-01/Accounts/{PROJECT_ID}/Recordings.json")},
        "type": "Full",
        "uri": format!("/2010-04-01/Accounts/{PROJECT_ID}.json")
    });
    let mock = fixture
        .mock_get(
            &format!("/2010-04-01/Accounts/{PROJECT_ID}.json"),
            Matcher::Missing,
            200,
            &body.to_string(),
            1,
        )
        .await;

    let account = fixture.client().api().account().fetch().await.unwrap();

    mock.assert_async().await;
    assert_eq!(account.text("friendly_name"), Some("Main project"));
    assert_eq!(account.text("owner_account_sid"), Some(""));
    assert!(account.datetime("date_created").is_some());
    assert!(account.json("subresource_uris").is_some());
}

#[tokio::test]
async fn fetch_fax_through_the_fax_domain() {
    let fixture = MockServerFixture::new().await;
    let body = json!({
        "sid": "FX0001",
        "account_sid": PROJECT_ID,
        "from": "+15017122661",
        "to": "+15558675310",
        "quality": "fine",
        "media_url": "https://example.com/fax.pdf",
        "num_pages": 2,
        "duration": 60,
        "status": "delivered",
        "direction": "outbound",
        "api_version": "v1",
        "price": null,
        "price_unit": "USD",
        "date_created": "Fri, 14 Oct 2016 21:56:34 +0000",
        "date_updated": "Fri, 14 Oct 2016 21:57:34 +0000",
        "url": "https://example.com/Faxes/FX0001"
    });
    let mock = fixture
        .mock_get(
            &format!("/2010-04-01/Accounts/{PROJECT_ID}/Faxes/FX0001"),
            Matcher::Missing,
            200,
            &body.to_string(),
            1,
        )
        .await;

    let fax = fixture.client().fax().fax("FX0001").fetch().await.unwrap();

    mock.assert_async().await;
    assert_eq!(fax.integer("num_pages"), Some(2));
    assert_eq!(fax.get("price"), Some(&FieldValue::Null));
    assert_eq!(fax.solution().get("sid"), Some("FX0001"));
}

#[tokio::test]
async fn recordings_page_decodes_every_record() {
    let fixture = MockServerFixture::new().await;
    let path = format!("/2010-04-01/Accounts/{PROJECT_ID}/Recordings.json");
    let body = json!({
        "uri": path,
        "page": 0,
        "page_size": 50,
        "next_page_uri": null,
        "recordings": [recording("RE0001"), recording("RE0002")]
    });
    let mock = fixture
        .mock_get(&path, Matcher::Exact("PageSize=50".into()), 200, &body.to_string(), 1)
        .await;

    let page = fixture
        .client()
        .api()
        .recordings()
        .page(&(), PageOptions::new().page_size(50))
        .await
        .unwrap();

    mock.assert_async().await;
    let sids: Vec<_> = page.records().iter().filter_map(|r| r.sid()).collect();
    assert_eq!(sids, ["RE0001", "RE0002"]);
    assert_eq!(page.next_page_uri(), None);
}

#[tokio::test]
async fn not_found_becomes_rest_error() {
    let fixture = MockServerFixture::new().await;
    let body = json!({
        "code": 20404,
        "message": "The requested resource was not found",
        "more_info": "https://www.signalwire.com/docs/errors/20404",
        "status": 404
    });
    let _mock = fixture
        .mock_get(
            &format!("/2010-04-01/Accounts/{PROJECT_ID}/Recordings/RE404.json"),
            Matcher::Any,
            404,
            &body.to_string(),
            1,
        )
        .await;

    let err = fixture.client().api().recording("RE404").fetch().await.unwrap_err();

    let rest = err.as_rest().expect("rest error");
    assert_eq!(rest.status, 404);
    assert_eq!(rest.code, Some(20404));
    assert_eq!(rest.method, "GET");
    assert!(rest.uri.ends_with("/Recordings/RE404.json"));
    assert_eq!(rest.render_plain(), "HTTP 404 error: The requested resource was not found");
    assert_eq!(rest.docs_url().as_deref(), Some("https://www.signalwire.com/docs/errors/20404"));
}

#[tokio::test]
async fn non_json_error_body_is_kept() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_get(
            &format!("/2010-04-01/Accounts/{PROJECT_ID}/Transcriptions/TR1.json"),
            Matcher::Any,
            502,
            "upstream unavailable",
            1,
        )
        .await;

    let err = fixture.client().api().transcription("TR1").fetch().await.unwrap_err();
    match err {
        Error::Rest(rest) => {
            assert_eq!(rest.status, 502);
            assert_eq!(rest.code, None);
            assert_eq!(rest.message, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_required_field_is_malformed_response() {
    let fixture = MockServerFixture::new().await;
    let mut body = recording("RE0001");
    body.as_object_mut().unwrap().remove("call_sid");
    let _mock = fixture
        .mock_get(
            &format!("/2010-04-01/Accounts/{PROJECT_ID}/Recordings/RE0001.json"),
            Matcher::Any,
            200,
            &body.to_string(),
            1,
        )
        .await;

    let err = fixture.client().api().recording("RE0001").fetch().await.unwrap_err();
    match err {
        Error::MalformedResponse { resource, field, .. } => {
            assert_eq!(resource, "recording");
            assert_eq!(field, "call_sid");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
