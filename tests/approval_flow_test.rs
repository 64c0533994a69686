/// Integration tests for the load/select/dispatch flow
mod test_utilities;

use rfq_approve::prelude::*;
use test_utilities::fixtures::{quotation_line, step_record};
use test_utilities::mocks::*;

fn credentials() -> Credentials {
    Credentials::new("approver", "secret")
}

fn five_lines() -> Vec<QuotationLine> {
    (1..=5)
        .map(|n| quotation_line(n, "300004", 100.0 * n as f64))
        .collect()
}

#[tokio::test]
async fn test_load_builds_matrix_and_seeds_approved_lines() {
    let mut lines = vec![
        quotation_line(1, "300004", 12197.19),
        quotation_line(1, "300005", 21954.94),
        quotation_line(2, "300004", 1219719.0),
    ];
    lines[2].approval_status = Some(ApprovalStatus::Approved);

    let gateway = MockApprovalGateway::new().with_lines(lines);
    let progress = MockProgressReporter::new();
    let use_case = LoadQuotationUseCase::new(gateway, progress.clone());

    let mut selection = SelectionState::new();
    let view = use_case
        .execute(&credentials(), 119, 1, &mut selection)
        .await
        .unwrap();

    assert_eq!(view.matrix.products.len(), 2);
    assert_eq!(view.matrix.vendors.len(), 2);
    // 300005 quoted only product 1; its second slot is gap-filled.
    let sparse = view
        .matrix
        .vendors
        .iter()
        .find(|v| v.vendor_no == "300005")
        .unwrap();
    assert_eq!(sparse.offers.len(), 2);
    assert!(sparse.offers[1].is_placeholder());

    // The approved line arrived pre-selected and locked.
    assert!(view.is_selected(2, "300004"));
    assert!(view.is_locked(2, "300004"));
    assert!(progress.message_count() >= 2);
}

#[tokio::test]
async fn test_partial_failure_keeps_failed_selections_and_reloads() {
    let gateway = MockApprovalGateway::new()
        .with_lines(five_lines())
        .failing_on(&[2, 4]);
    let progress = MockProgressReporter::new();

    let load = LoadQuotationUseCase::new(gateway.clone(), MockProgressReporter::new());
    let mut selection = SelectionState::new();
    let view = load
        .execute(&credentials(), 119, 1, &mut selection)
        .await
        .unwrap();
    for line in &view.lines {
        selection.toggle(line.line_no, &line.vendor_no, true, &view.lines);
    }

    let dispatch = DispatchApprovalsUseCase::new(gateway.clone(), progress.clone());
    let context = DispatchContext {
        inquiry_no: 119,
        revision_no: 1,
        note: "checked".to_string(),
        status: ApprovalStatus::Approved,
    };
    let outcome = dispatch
        .execute(&credentials(), &context, &view.lines, &mut selection)
        .await
        .unwrap();

    assert_eq!(outcome.report.success_count(), 3);
    assert_eq!(outcome.report.failure_count(), 2);
    assert_eq!(gateway.submitted().len(), 5);

    // Failed items stay selected for a retry.
    assert!(selection.is_selected(2, "300004"));
    assert!(selection.is_selected(4, "300004"));

    // At least one success, so the reload ran and the refreshed view
    // carries the new server-side statuses, re-seeded into the selection.
    assert!(outcome.report.reloaded);
    let refreshed = outcome.refreshed.unwrap();
    assert!(refreshed.is_locked(1, "300004"));
    assert!(refreshed.is_locked(3, "300004"));
    assert!(!refreshed.is_locked(2, "300004"));
    assert!(selection.is_selected(1, "300004"));

    let summary = progress
        .get_messages()
        .into_iter()
        .find(|m| m.starts_with("Completed:"))
        .unwrap();
    assert!(summary.contains("3 item(s) approved, 2 failed"));
}

#[tokio::test]
async fn test_empty_selection_dispatch_makes_no_requests() {
    let gateway = MockApprovalGateway::new().with_lines(five_lines());
    let dispatch = DispatchApprovalsUseCase::new(gateway.clone(), MockProgressReporter::new());

    let mut selection = SelectionState::new();
    let context = DispatchContext {
        inquiry_no: 119,
        revision_no: 1,
        note: String::new(),
        status: ApprovalStatus::Approved,
    };
    let err = dispatch
        .execute(&credentials(), &context, &five_lines(), &mut selection)
        .await
        .unwrap_err();

    assert!(format!("{}", err).contains("No items selected"));
    assert!(gateway.submitted().is_empty());
    assert_eq!(gateway.fetch_calls(), 0);
}

#[tokio::test]
async fn test_rejection_flow_mirrors_approval() {
    let gateway = MockApprovalGateway::new().with_lines(five_lines());
    let dispatch = DispatchApprovalsUseCase::new(gateway.clone(), MockProgressReporter::new());

    let lines = five_lines();
    let mut selection = SelectionState::new();
    selection.toggle(1, "300004", true, &lines);
    selection.toggle(3, "300004", true, &lines);

    let context = DispatchContext {
        inquiry_no: 119,
        revision_no: 1,
        note: "over budget".to_string(),
        status: ApprovalStatus::Rejected,
    };
    let outcome = dispatch
        .execute(&credentials(), &context, &lines, &mut selection)
        .await
        .unwrap();

    assert_eq!(outcome.report.success_count(), 2);
    for request in gateway.submitted() {
        assert_eq!(request.status, ApprovalStatus::Rejected);
        assert_eq!(request.note, "over budget");
        assert_eq!(request.lu_name, "InquiryLineQuot");
    }
    let refreshed = outcome.refreshed.unwrap();
    assert!(refreshed.is_locked(1, "300004"));
    assert!(refreshed.is_locked(3, "300004"));
}

#[tokio::test]
async fn test_load_failure_surfaces_and_preserves_selection() {
    let gateway = MockApprovalGateway::new().with_fetch_failure();
    let load = LoadQuotationUseCase::new(gateway, MockProgressReporter::new());

    let lines = five_lines();
    let mut selection = SelectionState::new();
    selection.toggle(1, "300004", true, &lines);
    let before = selection.clone();

    let err = load
        .execute(&credentials(), 119, 1, &mut selection)
        .await
        .unwrap_err();

    assert!(format!("{}", err).contains("inquiry 119"));
    assert_eq!(selection, before);
}

#[tokio::test]
async fn test_locked_lines_resist_toggles_through_full_flow() {
    let mut lines = five_lines();
    lines[0].approval_status = Some(ApprovalStatus::Approved);
    lines[1].approval_status = Some(ApprovalStatus::Rejected);

    let gateway = MockApprovalGateway::new().with_lines(lines);
    let load = LoadQuotationUseCase::new(gateway, MockProgressReporter::new());

    let mut selection = SelectionState::new();
    let view = load
        .execute(&credentials(), 119, 1, &mut selection)
        .await
        .unwrap();

    // Only the APP line was seeded; the REJ line is locked but unselected.
    assert!(selection.is_selected(1, "300004"));
    assert!(!selection.is_selected(2, "300004"));

    selection.toggle(1, "300004", false, &view.lines);
    selection.toggle(2, "300004", true, &view.lines);
    assert!(selection.is_selected(1, "300004"));
    assert!(!selection.is_selected(2, "300004"));
}

#[tokio::test]
async fn test_steps_listing_with_filter_and_sort() {
    let gateway = MockApprovalGateway::new().with_steps(vec![
        step_record(121, 10, "Pending"),
        step_record(119, 20, "Pending"),
        step_record(120, 10, "Approved"),
    ]);
    let use_case = ListStepsUseCase::new(gateway, MockProgressReporter::new());

    let filter = StepFilter {
        status: Some("pending".to_string()),
        sort: Some(StepSortColumn::InquiryNo),
        ..Default::default()
    };
    let steps = use_case.execute(&credentials(), &filter).await.unwrap();

    let order: Vec<u32> = steps.iter().map(|s| s.inquiry_no).collect();
    assert_eq!(order, vec![119, 121]);
    assert_eq!(steps[0].approver_order(), 2);
}

#[tokio::test]
async fn test_matrix_report_renders_from_live_view() {
    let gateway = MockApprovalGateway::new().with_lines(vec![
        quotation_line(1, "300004", 100.0),
        quotation_line(2, "300005", 200.0),
    ]);
    let load = LoadQuotationUseCase::new(gateway, MockProgressReporter::new());

    let mut selection = SelectionState::new();
    let view = load
        .execute(&credentials(), 119, 1, &mut selection)
        .await
        .unwrap();

    let markdown = MarkdownFormatter::new().format_matrix(&view).unwrap();
    assert!(markdown.contains("Inquiry 119"));
    assert!(markdown.contains("Vendor 300004 (300004)"));

    let json = JsonFormatter::new().format_matrix(&view).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["products"].as_array().unwrap().len(), 2);
}
