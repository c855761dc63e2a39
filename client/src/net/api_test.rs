use super::*;

#[test]
fn endpoint_derives_path_from_wire_name() {
    assert_eq!(endpoint(Operation::ListRecords), "/api/v1/listRecords");
    assert_eq!(endpoint(Operation::BookTechnician), "/api/v1/bookTechnician");
    assert_eq!(
        endpoint(Operation::GetCustomerProgress),
        "/api/v1/getCustomerProgress"
    );
}

#[test]
fn every_operation_gets_a_distinct_endpoint() {
    let mut paths: Vec<String> = Operation::ALL.iter().map(|op| endpoint(*op)).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), Operation::ALL.len());
}

#[test]
fn call_error_messages_name_the_failure() {
    assert_eq!(
        CallError::Status(503).to_string(),
        "service returned status 503"
    );
    assert_eq!(
        CallError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(
        CallError::Unavailable.to_string(),
        "remote calls are not available outside the browser"
    );
}
