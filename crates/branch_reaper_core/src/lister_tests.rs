use super::*;
use crate::test_support::{branch_aged, MockHost};
use chrono::Utc;
use gitlab_client::models::Branch;

fn page_of(count: usize, prefix: &str) -> Vec<Branch> {
    let now = Utc::now();
    (0..count)
        .map(|i| branch_aged(&format!("{}-{}", prefix, i), false, 10, now))
        .collect()
}

#[tokio::test]
async fn test_single_short_page_stops_after_one_request() {
    let host = MockHost::with_pages(vec![page_of(3, "p1")]);

    let branches = list_all_branches(&host).await.expect("listing failed");

    assert_eq!(branches.len(), 3);
    assert_eq!(*host.requested_pages.lock().unwrap(), vec![1]);
}

#[tokio::test]
async fn test_full_pages_advance_until_short_page() {
    // Pages 1 and 2 are full, page 3 is short: 237 branches, no page 4.
    let host = MockHost::with_pages(vec![
        page_of(PAGE_SIZE as usize, "p1"),
        page_of(PAGE_SIZE as usize, "p2"),
        page_of(37, "p3"),
    ]);

    let branches = list_all_branches(&host).await.expect("listing failed");

    assert_eq!(branches.len(), 237);
    assert_eq!(*host.requested_pages.lock().unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_exactly_full_final_page_requests_one_more() {
    // A final page of exactly PAGE_SIZE cannot be distinguished from a
    // non-final one, so the lister asks for the (empty) page after it.
    let host = MockHost::with_pages(vec![page_of(PAGE_SIZE as usize, "p1")]);

    let branches = list_all_branches(&host).await.expect("listing failed");

    assert_eq!(branches.len(), PAGE_SIZE as usize);
    assert_eq!(*host.requested_pages.lock().unwrap(), vec![1, 2]);
}

#[tokio::test]
async fn test_empty_project_yields_empty_list() {
    let host = MockHost::with_pages(vec![]);

    let branches = list_all_branches(&host).await.expect("listing failed");

    assert!(branches.is_empty());
}

#[tokio::test]
async fn test_page_failure_discards_partial_accumulation() {
    let host = MockHost {
        pages: vec![page_of(PAGE_SIZE as usize, "p1"), page_of(50, "p2")],
        fail_on_page: Some(2),
        ..MockHost::default()
    };

    let result = list_all_branches(&host).await;

    assert!(matches!(result, Err(Error::Fetch(_))));
    assert_eq!(*host.requested_pages.lock().unwrap(), vec![1, 2]);
}
