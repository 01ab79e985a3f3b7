//! End-to-end publishing pipeline tests against scripted services.

use std::sync::Arc;

use mast::{PublishError, Publisher};
use mast_core::{CastContent, CoreError};
use mast_net::transport::scripted::ScriptedTransport;
use mast_net::{HttpMethod, ResolveError, SubmitError};
use mast_store::{HubPreference, HubStore, MemoryStore, StoreError, DEFAULT_HUB_URL};
use mast_testkit::{responses, TestFixture};

const DIRECTORY_URL: &str = "https://directory.example/v1";

fn publisher(fixture: &TestFixture) -> Publisher<MemoryStore, Arc<ScriptedTransport>> {
    Publisher::new(Arc::clone(&fixture.store), Arc::clone(&fixture.transport))
        .with_directory_url(DIRECTORY_URL)
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[tokio::test]
async fn test_publish_text_only() {
    let fixture = TestFixture::new();
    fixture
        .transport
        .push_response(200, responses::submit_ack(&[0xd2; 20]));

    let ack = publisher(&fixture)
        .publish(&CastContent::new("hello from the command line"))
        .await
        .unwrap();
    assert_eq!(ack.hash, format!("0x{}", "d2".repeat(20)));

    let requests = fixture.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].url, format!("{DEFAULT_HUB_URL}/v1/submitMessage"));
    assert!(requests[0]
        .headers
        .contains(&("Content-Type".to_owned(), "application/octet-stream".to_owned())));

    // The submitted envelope carries the text and the fixture's signer.
    let body = requests[0].body.as_deref().unwrap();
    assert!(contains_subslice(body, b"hello from the command line"));
    assert!(contains_subslice(
        body,
        fixture.keypair().public_key().as_bytes()
    ));
}

#[tokio::test]
async fn test_publish_with_channel_resolves_before_submission() {
    let fixture = TestFixture::new();
    fixture
        .transport
        .push_response(200, responses::channel_record("dev", "https://example/dev"));
    fixture
        .transport
        .push_response(200, responses::submit_ack(&[0x11; 20]));

    publisher(&fixture)
        .publish(&CastContent::new("gm").with_channel("dev"))
        .await
        .unwrap();

    let requests = fixture.transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].url,
        format!("{DIRECTORY_URL}/channel?channelId=dev")
    );
    // The resolved canonical URL rides along as the parent.
    let body = requests[1].body.as_deref().unwrap();
    assert!(contains_subslice(body, b"https://example/dev"));
}

#[tokio::test]
async fn test_unresolvable_channel_aborts_publish() {
    let fixture = TestFixture::new();
    fixture.transport.push_response(404, b"not found".to_vec());

    let err = publisher(&fixture)
        .publish(&CastContent::new("gm").with_channel("nope"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PublishError::Resolve(ResolveError::ChannelNotFound { .. })
    ));
    // Nothing was submitted.
    assert_eq!(fixture.transport.requests().len(), 1);
}

#[tokio::test]
async fn test_empty_cast_fails_before_any_network() {
    let fixture = TestFixture::new();

    let err = publisher(&fixture)
        .publish(&CastContent::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PublishError::Content(CoreError::EmptyCast)
    ));
    assert!(fixture.transport.requests().is_empty());
}

#[tokio::test]
async fn test_missing_credentials_fail_before_any_network() {
    let fixture = TestFixture::unauthorized();

    let err = publisher(&fixture)
        .publish(&CastContent::new("gm"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PublishError::Store(StoreError::NoCredentials)
    ));
    assert!(fixture.transport.requests().is_empty());
}

#[tokio::test]
async fn test_hub_rejection_is_classified() {
    let fixture = TestFixture::new();
    fixture.transport.push_response(429, b"slow down".to_vec());

    let err = publisher(&fixture)
        .publish(&CastContent::new("gm"))
        .await
        .unwrap_err();

    assert!(matches!(err, PublishError::Submit(SubmitError::RateLimited)));
}

#[tokio::test]
async fn test_publish_uses_stored_hub_and_api_key() {
    let fixture = TestFixture::new();
    fixture
        .store
        .save_hub(&HubPreference {
            base_url: "https://hub.example".to_owned(),
            api_key: Some("secret".to_owned()),
        })
        .await
        .unwrap();
    fixture
        .transport
        .push_response(200, responses::submit_ack(&[0x22; 20]));

    publisher(&fixture)
        .publish(&CastContent::new("gm"))
        .await
        .unwrap();

    let requests = fixture.transport.requests();
    assert_eq!(requests[0].url, "https://hub.example/v1/submitMessage");
    assert!(requests[0]
        .headers
        .contains(&("x-api-key".to_owned(), "secret".to_owned())));
}

#[tokio::test]
async fn test_embeds_ride_along() {
    let fixture = TestFixture::new();
    fixture
        .transport
        .push_response(200, responses::submit_ack(&[0x33; 20]));

    publisher(&fixture)
        .publish(
            &CastContent::new("look at this")
                .with_embed("https://a.example/post")
                .with_embed(""),
        )
        .await
        .unwrap();

    let body = fixture.transport.requests()[0].body.clone().unwrap();
    assert!(contains_subslice(&body, b"https://a.example/post"));
}

#[tokio::test]
async fn test_too_many_embeds_rejected() {
    let fixture = TestFixture::new();

    let err = publisher(&fixture)
        .publish(
            &CastContent::new("gm")
                .with_embed("https://a.example")
                .with_embed("https://b.example")
                .with_embed("https://c.example"),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PublishError::Content(CoreError::TooManyEmbeds { max: 2, got: 3 })
    ));
    assert!(fixture.transport.requests().is_empty());
}
