use super::*;
use crate::actions::History;
use crate::net::provider::ProviderError;

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_default_not_connected() {
    let session = SessionState::default();
    assert!(session.account.is_none());
    assert!(!session.is_connected());
}

#[test]
fn probe_with_account_adopts_it() {
    let mut session = SessionState::default();
    assert!(session.apply_probe(Ok(Some("0xabc".to_owned()))));
    assert_eq!(session.account.as_deref(), Some("0xabc"));
}

#[test]
fn probe_without_provider_leaves_session_unset() {
    let mut session = SessionState::default();
    assert!(!session.apply_probe(Err(WalletError::MissingProvider)));
    assert_eq!(session, SessionState::default());
}

#[test]
fn probe_without_authorized_account_leaves_session_unset() {
    let mut session = SessionState::default();
    assert!(!session.apply_probe(Ok(None)));
    assert!(!session.is_connected());
}

#[test]
fn connect_success_adopts_exact_address() {
    let mut session = SessionState::default();
    session.apply_connect(Ok("0xABC".to_owned())).expect("connect");
    assert_eq!(session.account.as_deref(), Some("0xABC"));
}

#[test]
fn rejected_connect_keeps_previous_account() {
    let mut session = SessionState { account: Some("0xold".to_owned()), ..SessionState::default() };
    let rejection = WalletError::Provider(ProviderError::Rejected { message: "denied".to_owned() });

    let err = session.apply_connect(Err(rejection.clone())).expect_err("should fail");
    assert_eq!(err, rejection);
    assert_eq!(session.account.as_deref(), Some("0xold"));
}

#[test]
fn connect_missing_provider_is_returned_for_alert() {
    let mut session = SessionState::default();
    let err = session.apply_connect(Err(WalletError::MissingProvider)).expect_err("should fail");
    assert_eq!(err, WalletError::MissingProvider);
    assert!(!session.is_connected());
}

#[test]
fn wallet_request_blocks_overlapping_request() {
    let mut session = SessionState::default();
    assert!(session.try_begin_request());
    assert!(!session.try_begin_request());
    assert!(session.requesting);
}

#[test]
fn probe_outcome_releases_wallet_for_connect() {
    let mut session = SessionState::default();
    assert!(session.try_begin_request());
    session.apply_probe(Ok(None));
    assert!(!session.requesting);
    assert!(session.try_begin_request());
}

#[test]
fn failed_connect_releases_wallet() {
    let mut session = SessionState::default();
    assert!(session.try_begin_request());
    let _ = session.apply_connect(Err(WalletError::NoAccounts));
    assert!(!session.requesting);
}

// =============================================================
// WavesState
// =============================================================

#[test]
fn waves_default_empty() {
    let state = WavesState::default();
    assert!(state.waves.is_empty());
    assert!(state.total.is_none());
    assert!(!state.is_mining());
    assert!(state.error.is_none());
}

#[test]
fn apply_history_with_records_sets_list_and_total() {
    let mut state = WavesState::default();
    let record = WaveRecord::from_parts("0xABC", 1_670_000_000, "hi");
    state.error = Some("stale".to_owned());
    state.apply_history(History { total: 1, waves: Some(vec![record.clone()]) });
    assert_eq!(state.waves, vec![record]);
    assert_eq!(state.count(), 1);
    assert!(state.error.is_none());
}

#[test]
fn apply_count_only_history_keeps_list() {
    let record = WaveRecord::from_parts("0xABC", 1_670_000_000, "hi");
    let mut state = WavesState { waves: vec![record.clone()], ..WavesState::default() };
    state.apply_history(History { total: 9, waves: None });
    assert_eq!(state.waves, vec![record]);
    assert_eq!(state.count(), 9);
}

#[test]
fn count_falls_back_to_list_length() {
    let state = WavesState {
        waves: vec![WaveRecord::from_parts("0x1", 1, "a"), WaveRecord::from_parts("0x2", 2, "b")],
        ..WavesState::default()
    };
    assert_eq!(state.count(), 2);
}

#[test]
fn mining_lifecycle_tracks_pending_hash() {
    let mut state = WavesState::default();
    assert!(state.try_begin_wave());
    state.begin_mining("0xfeed");
    assert!(state.is_mining());
    assert_eq!(state.pending_tx.as_deref(), Some("0xfeed"));
    state.finish_mining();
    assert!(!state.is_mining());
    assert!(!state.is_busy());
}

#[test]
fn second_wave_is_refused_before_hash_arrives() {
    let mut state = WavesState::default();
    assert!(state.try_begin_wave());
    assert!(state.is_busy());
    assert!(!state.is_mining());
    assert!(!state.try_begin_wave());
}

#[test]
fn overlapping_wave_cannot_displace_pending_one() {
    let mut state = WavesState::default();
    assert!(state.try_begin_wave());
    state.begin_mining("0xaaa");
    assert!(!state.try_begin_wave());
    assert_eq!(state.pending_tx.as_deref(), Some("0xaaa"));

    state.finish_mining();
    assert!(!state.is_busy());
    assert!(state.try_begin_wave());
}

#[test]
fn failure_before_hash_releases_slot() {
    let mut state = WavesState::default();
    assert!(state.try_begin_wave());
    state.fail("User denied transaction signature.");
    assert!(!state.is_busy());
    assert!(state.try_begin_wave());
    assert!(state.error.is_none());
}

#[test]
fn fail_records_message_and_stops_mining() {
    let mut state = WavesState::default();
    assert!(state.try_begin_wave());
    state.begin_mining("0xfeed");
    state.fail("transaction 0xfeed reverted");
    assert!(!state.is_busy());
    assert_eq!(state.error.as_deref(), Some("transaction 0xfeed reverted"));
}
