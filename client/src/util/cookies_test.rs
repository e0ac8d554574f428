use super::*;

#[test]
fn find_in_header_returns_named_value() {
    let header = "theme=dark; accessToken=abc.def.ghi; refreshToken=r1";
    assert_eq!(find_in_header(header, ACCESS_TOKEN), Some("abc.def.ghi".to_owned()));
    assert_eq!(find_in_header(header, REFRESH_TOKEN), Some("r1".to_owned()));
}

#[test]
fn find_in_header_missing_name_is_none() {
    assert_eq!(find_in_header("theme=dark", ACCESS_TOKEN), None);
    assert_eq!(find_in_header("", ACCESS_TOKEN), None);
}

#[test]
fn find_in_header_empty_value_is_none() {
    assert_eq!(find_in_header("accessToken=; refreshToken=r1", ACCESS_TOKEN), None);
}

#[test]
fn find_in_header_keeps_path_values() {
    assert_eq!(find_in_header("redirectTo=/track/42", REDIRECT_TO), Some("/track/42".to_owned()));
}

#[test]
fn find_in_header_decodes_percent_encoding() {
    assert_eq!(find_in_header("redirectTo=%2Fplant-id%2F9", REDIRECT_TO), Some("/plant-id/9".to_owned()));
}

#[test]
fn set_assignment_encodes_value_for_round_trip() {
    let raw = set_assignment(REDIRECT_TO, "/track/7");
    let pair = raw.split(';').next().unwrap_or_default();
    assert_eq!(find_in_header(pair, REDIRECT_TO), Some("/track/7".to_owned()));
}

#[test]
fn set_assignment_scopes_cookie_to_root() {
    let raw = set_assignment(ACCESS_TOKEN, "tok");
    assert!(raw.starts_with("accessToken=tok"));
    assert!(raw.contains("Path=/"));
    assert!(raw.contains("SameSite=Lax"));
}

#[test]
fn removal_assignment_expires_immediately() {
    let raw = removal_assignment(REDIRECT_TO);
    assert!(raw.starts_with("redirectTo="));
    assert!(raw.contains("Max-Age=0"));
    assert!(raw.contains("Path=/"));
}

#[test]
fn local_jar_starts_empty() {
    assert_eq!(document_cookie(), "");
    assert_eq!(get(ACCESS_TOKEN), None);
}

#[test]
fn set_then_get_reads_value_back() {
    set(REDIRECT_TO, "/track/7");
    set(ACCESS_TOKEN, "tok");
    assert_eq!(get(REDIRECT_TO), Some("/track/7".to_owned()));
    assert_eq!(get(ACCESS_TOKEN), Some("tok".to_owned()));
    assert!(document_cookie().contains("redirectTo=%2Ftrack%2F7"));
}

#[test]
fn set_overwrites_previous_value() {
    set(ACCESS_TOKEN, "old");
    set(ACCESS_TOKEN, "new");
    assert_eq!(get(ACCESS_TOKEN), Some("new".to_owned()));
}

#[test]
fn remove_drops_only_that_cookie() {
    set(ACCESS_TOKEN, "tok");
    set(REFRESH_TOKEN, "ref");
    remove(ACCESS_TOKEN);
    assert_eq!(get(ACCESS_TOKEN), None);
    assert_eq!(get(REFRESH_TOKEN), Some("ref".to_owned()));
}
