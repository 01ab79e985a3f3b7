//! Canned HTTP response bodies matching the wire formats of the hub, the
//! channel directory, and the key issuer.

/// Channel directory record for `channel_id` pointing at `url`.
pub fn channel_record(channel_id: &str, url: &str) -> Vec<u8> {
    serde_json::json!({
        "result": {
            "channel": {
                "id": channel_id,
                "url": url,
                "name": channel_id,
            }
        }
    })
    .to_string()
    .into_bytes()
}

/// Hub acknowledgement carrying the given message hash (raw bytes).
pub fn submit_ack(hash: &[u8]) -> Vec<u8> {
    serde_json::json!({ "hash": format!("0x{}", hex::encode(hash)) })
        .to_string()
        .into_bytes()
}

/// Issuer sign-in response minting a signer with the given seed.
pub fn sign_in_ok(seed: &[u8; 32], polling_token: &str) -> Vec<u8> {
    serde_json::json!({
        "deepLinkUrl": format!("https://client.example/approve?t={polling_token}"),
        "pollingToken": polling_token,
        "privateKey": hex::encode(seed),
        "publicKey": hex::encode([0u8; 32]),
    })
    .to_string()
    .into_bytes()
}

/// Issuer poll response: still waiting for the user.
pub fn poll_pending() -> Vec<u8> {
    br#"{"state":"pending"}"#.to_vec()
}

/// Issuer poll response: approved by `fid`.
pub fn poll_approved(fid: u64) -> Vec<u8> {
    serde_json::json!({ "state": "approved", "userFid": fid })
        .to_string()
        .into_bytes()
}
