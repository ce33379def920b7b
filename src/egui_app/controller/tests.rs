use super::test_support::{
    ScriptedService, controller_with, sample_result, wait_for_idle, wait_until,
};
use super::*;
use crate::detection::{Origin, Prediction, RandomSample};
use crate::egui_app::view_model::PanelView;
use crate::service::ServiceError;

#[test]
fn whitespace_submission_never_calls_the_service() {
    let service = Arc::new(ScriptedService::default());
    let mut controller = controller_with(&service);
    controller.ui.input.text = "   \n\t".into();

    assert_eq!(controller.submit(), Err(SubmitError::EmptyInput));
    assert!(!controller.has_pending_requests());
    assert_eq!(service.classify_calls(), 0);
    assert!(controller.result().is_none());
}

#[test]
fn whitespace_submission_keeps_previous_result() {
    let service = Arc::new(ScriptedService::default());
    service.answer("hello", Ok(sample_result(Prediction::Human, 70.0)));
    let mut controller = controller_with(&service);
    controller.ui.input.text = "hello".into();
    controller.submit().unwrap();
    wait_for_idle(&mut controller);

    controller.ui.input.text = " ".into();
    assert_eq!(controller.submit(), Err(SubmitError::EmptyInput));
    assert_eq!(service.classify_calls(), 1);
    assert_eq!(controller.result().map(|r| r.confidence()), Some(70.0));
}

#[test]
fn surrounding_whitespace_reaches_the_service() {
    let service = Arc::new(ScriptedService::default());
    service.answer("  hello world\n", Ok(sample_result(Prediction::Human, 64.0)));
    let mut controller = controller_with(&service);
    controller.ui.input.text = "  hello world\n".into();

    controller.submit().unwrap();
    wait_for_idle(&mut controller);

    assert_eq!(controller.ui.status.badge_label, "Info", "{}", controller.ui.status.text);
    assert_eq!(controller.result().map(|r| r.confidence()), Some(64.0));
    assert_eq!(controller.ui.input.text, "  hello world\n");
}

#[test]
fn successful_submission_replaces_result() {
    let service = Arc::new(ScriptedService::default());
    service.answer("first", Ok(sample_result(Prediction::Human, 60.0)));
    service.answer("second", Ok(sample_result(Prediction::Bot, 95.5)));
    let mut controller = controller_with(&service);

    controller.ui.input.text = "first".into();
    controller.submit().unwrap();
    wait_for_idle(&mut controller);
    let first = controller.shared_result().unwrap();

    controller.ui.input.text = "second".into();
    controller.submit().unwrap();
    wait_for_idle(&mut controller);
    let second = controller.shared_result().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.prediction(), Prediction::Human);
    assert_eq!(second.prediction(), Prediction::Bot);
    assert_eq!(controller.ui.status.badge_label, "Info");
}

#[test]
fn failed_submission_preserves_result_and_warns() {
    let service = Arc::new(ScriptedService::default());
    service.answer("ok", Ok(sample_result(Prediction::Bot, 88.0)));
    service.answer(
        "broken",
        Err(ServiceError::Status {
            code: 500,
            body: "boom".into(),
        }),
    );
    let mut controller = controller_with(&service);

    controller.ui.input.text = "ok".into();
    controller.submit().unwrap();
    wait_for_idle(&mut controller);

    controller.ui.input.text = "broken".into();
    controller.submit().unwrap();
    wait_for_idle(&mut controller);

    assert_eq!(controller.result().map(|r| r.confidence()), Some(88.0));
    assert_eq!(controller.ui.status.badge_label, "Warning");
    assert!(controller.ui.status.text.contains("HTTP 500"));
    assert_eq!(controller.ui.input.text, "broken");
}

#[test]
fn superseded_response_is_dropped() {
    let service = Arc::new(ScriptedService::default());
    service.answer("slow", Ok(sample_result(Prediction::Human, 51.0)));
    service.answer("fast", Ok(sample_result(Prediction::Bot, 99.0)));
    let release_slow = service.gate("slow");
    let mut controller = controller_with(&service);

    controller.ui.input.text = "slow".into();
    let slow = controller.submit().unwrap();
    controller.ui.input.text = "fast".into();
    let fast = controller.submit().unwrap();
    assert!(slow < fast);

    wait_until(&mut controller, |controller| controller.result().is_some());
    assert!(controller.has_pending_requests());
    release_slow.send(()).unwrap();
    wait_for_idle(&mut controller);

    let result = controller.result().unwrap();
    assert_eq!(result.prediction(), Prediction::Bot);
    assert_eq!(result.confidence(), 99.0);
}

#[test]
fn superseded_failure_does_not_report() {
    let service = Arc::new(ScriptedService::default());
    service.answer("fast", Ok(sample_result(Prediction::Bot, 90.0)));
    let release_slow = service.gate("slow");
    let mut controller = controller_with(&service);

    controller.ui.input.text = "slow".into();
    controller.submit().unwrap();
    controller.ui.input.text = "fast".into();
    controller.submit().unwrap();
    wait_until(&mut controller, |controller| controller.result().is_some());
    release_slow.send(()).unwrap();
    wait_for_idle(&mut controller);

    assert_eq!(controller.ui.status.badge_label, "Info");
    assert_eq!(controller.result().map(|r| r.confidence()), Some(90.0));
}

#[test]
fn superseded_random_sample_changes_neither_text_nor_result() {
    let service = Arc::new(ScriptedService::default());
    service.answer_random(Ok(RandomSample {
        text: "late random text".into(),
        result: sample_result(Prediction::Human, 55.0),
    }));
    service.answer("typed", Ok(sample_result(Prediction::Bot, 97.0)));
    let release_random = service.gate_random();
    let mut controller = controller_with(&service);

    let random = controller.fetch_random_sample();
    controller.ui.input.text = "typed".into();
    let typed = controller.submit().unwrap();
    assert!(random < typed);

    wait_until(&mut controller, |controller| controller.result().is_some());
    assert!(controller.has_pending_requests());
    let held = controller.shared_result().unwrap();
    release_random.send(()).unwrap();
    wait_for_idle(&mut controller);

    assert_eq!(service.random_calls(), 1);
    assert_eq!(controller.ui.input.text, "typed");
    assert!(Arc::ptr_eq(&held, &controller.shared_result().unwrap()));
    assert_eq!(held.prediction(), Prediction::Bot);
}

#[test]
fn random_sample_replaces_text_and_result_together() {
    let service = Arc::new(ScriptedService::default());
    let result = sample_result(Prediction::Human, 77.0).with_actual_origin(Some(Origin::Human));
    service.answer_random(Ok(RandomSample {
        text: "coffee first, then emails".into(),
        result,
    }));
    let mut controller = controller_with(&service);
    controller.ui.input.text = "draft".into();

    controller.fetch_random_sample();
    wait_for_idle(&mut controller);

    assert_eq!(service.random_calls(), 1);
    assert_eq!(controller.ui.input.text, "coffee first, then emails");
    assert_eq!(
        controller.result().and_then(|r| r.actual_origin()),
        Some(Origin::Human)
    );
}

#[test]
fn random_sample_failure_changes_nothing() {
    let service = Arc::new(ScriptedService::default());
    service.answer("mine", Ok(sample_result(Prediction::Bot, 66.0)));
    service.answer_random(Err(ServiceError::Transport("connection refused".into())));
    let mut controller = controller_with(&service);
    controller.ui.input.text = "mine".into();
    controller.submit().unwrap();
    wait_for_idle(&mut controller);
    let before = controller.shared_result().unwrap();

    controller.fetch_random_sample();
    wait_for_idle(&mut controller);

    assert_eq!(controller.ui.input.text, "mine");
    assert!(Arc::ptr_eq(&before, &controller.shared_result().unwrap()));
    assert_eq!(controller.ui.status.badge_label, "Warning");
}

#[test]
fn switching_tabs_keeps_the_result() {
    let service = Arc::new(ScriptedService::default());
    service.answer("text", Ok(sample_result(Prediction::Bot, 80.0)));
    let mut controller = controller_with(&service);
    controller.ui.input.text = "text".into();
    controller.submit().unwrap();
    wait_for_idle(&mut controller);
    let held = controller.shared_result().unwrap();

    for view in ActiveView::ALL {
        controller.select_view(view);
        assert_eq!(controller.ui.view.active(), view);
        assert!(Arc::ptr_eq(&held, &controller.shared_result().unwrap()));
    }
}

#[test]
fn comparison_without_result_is_empty() {
    let service = Arc::new(ScriptedService::default());
    let mut controller = controller_with(&service);
    controller.select_view(ActiveView::Comparison);
    assert!(matches!(
        controller.panel(),
        PanelView::Empty(ActiveView::Comparison)
    ));
    controller.select_view(ActiveView::Model);
    assert!(matches!(controller.panel(), PanelView::Model(_)));
}

#[test]
fn local_preview_tracks_input() {
    let service = Arc::new(ScriptedService::default());
    let mut controller = controller_with(&service);
    controller.ui.input.text = "hi @you #tag!".into();
    let preview = controller.local_preview();
    assert_eq!(preview.word_count, 3);
    assert_eq!(preview.mention_count, 1);
    assert_eq!(preview.hashtag_count, 1);
    assert_eq!(preview.exclamation_count, 1);
}
