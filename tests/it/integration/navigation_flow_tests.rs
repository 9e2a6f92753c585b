//! Navigation workflows across steps, jumps, typed input and flips.

use crate::helpers::TestViewerBuilder;
use flipbook::{ViewerCommand, ViewerEffect, ViewerEvent};

#[test]
fn test_ten_page_step_scenario() {
    let mut viewer = TestViewerBuilder::new().with_pages(10).build();
    assert_eq!(viewer.current_page(), 1);

    viewer.execute(ViewerCommand::StepNext);
    assert_eq!(viewer.current_page(), 6);

    viewer.execute(ViewerCommand::StepNext);
    assert_eq!(viewer.current_page(), 10);

    viewer.execute(ViewerCommand::StepPrev);
    assert_eq!(viewer.current_page(), 8);
    assert_eq!(viewer.page_input(), "8");
}

#[test]
fn test_step_next_clamps_to_last_page() {
    let mut viewer = TestViewerBuilder::new().with_pages(8).on_page(6).build();
    viewer.execute(ViewerCommand::StepNext);
    assert_eq!(viewer.current_page(), 8);
}

#[test]
fn test_step_prev_from_page_two_returns_to_cover() {
    let mut viewer = TestViewerBuilder::new().with_pages(10).on_page(2).build();
    viewer.execute(ViewerCommand::StepPrev);
    assert_eq!(viewer.current_page(), 1);
    assert_eq!(
        viewer.take_effects(),
        vec![ViewerEffect::FlipTo { spread: 0 }]
    );
}

#[test]
fn test_out_of_range_jumps_leave_state_unchanged() {
    let mut viewer = TestViewerBuilder::new().with_pages(10).on_page(4).build();
    let before = viewer.snapshot();

    viewer.execute(ViewerCommand::GoToPage(0));
    viewer.execute(ViewerCommand::GoToPage(11));

    assert_eq!(viewer.snapshot(), before);
    assert!(viewer.take_effects().is_empty());
}

#[test]
fn test_typed_input_flow() {
    let mut viewer = TestViewerBuilder::new().with_pages(30).build();

    // Typing alone does not navigate
    viewer.execute(ViewerCommand::SetPageInput("1".to_string()));
    viewer.execute(ViewerCommand::SetPageInput("17".to_string()));
    assert_eq!(viewer.current_page(), 1);
    assert_eq!(viewer.page_input(), "17");

    assert!(viewer.submit_current_input());
    assert_eq!(viewer.current_page(), 17);
    assert_eq!(
        viewer.take_effects(),
        vec![ViewerEffect::FlipTo { spread: 9 }]
    );
}

#[test]
fn test_unparsable_input_ignored() {
    let mut viewer = TestViewerBuilder::new().with_pages(10).on_page(3).build();
    viewer.execute(ViewerCommand::SubmitPageInput("abc".to_string()));
    assert_eq!(viewer.current_page(), 3);
    assert_eq!(viewer.page_input(), "abc");
    assert!(viewer.take_effects().is_empty());
}

#[test]
fn test_input_with_trailing_text_navigates() {
    let mut viewer = TestViewerBuilder::new().with_pages(10).build();
    viewer.execute(ViewerCommand::SubmitPageInput(" 9 pages".to_string()));
    assert_eq!(viewer.current_page(), 9);
    assert_eq!(viewer.page_input(), "9");
}

#[test]
fn test_external_flip_syncs_page_and_input() {
    let mut viewer = TestViewerBuilder::new().with_pages(20).on_page(9).build();
    viewer.execute(ViewerCommand::SetPageInput("1".to_string()));

    viewer.handle_event(ViewerEvent::ExternalFlip { spread: 1 });
    assert_eq!(viewer.current_page(), 2);
    assert_eq!(viewer.page_input(), "2");
    assert!(viewer.take_effects().is_empty());
}

#[test]
fn test_external_flip_to_huge_spread_ignored() {
    let mut viewer = TestViewerBuilder::new().with_pages(10).on_page(5).build();

    viewer.handle_event(ViewerEvent::ExternalFlip { spread: u32::MAX });
    viewer.handle_event(ViewerEvent::ExternalFlip { spread: 6 });
    assert_eq!(viewer.current_page(), 5);
    assert_eq!(viewer.page_input(), "5");
    assert!(viewer.take_effects().is_empty());
}

#[test]
fn test_zoom_and_pan_do_not_move_pages() {
    let mut viewer = TestViewerBuilder::new()
        .with_pages(10)
        .on_page(5)
        .with_zoom_steps(3)
        .build();

    viewer.execute(ViewerCommand::BeginDrag(flipbook::Point::new(0.0, 0.0)));
    viewer.execute(ViewerCommand::ContinueDrag(flipbook::Point::new(20.0, 10.0)));
    viewer.execute(ViewerCommand::EndDrag);

    assert_eq!(viewer.current_page(), 5);
    assert_eq!(viewer.pan(), flipbook::Point::new(20.0, 10.0));

    viewer.execute(ViewerCommand::ZoomOut);
    assert_eq!(viewer.pan(), flipbook::Point::ZERO);
}

#[test]
fn test_commands_ignored_while_loading() {
    let mut viewer = TestViewerBuilder::new().build();
    viewer.execute(ViewerCommand::StepNext);
    viewer.execute(ViewerCommand::GoToPage(1));
    viewer.handle_event(ViewerEvent::ExternalFlip { spread: 2 });

    assert!(!viewer.is_loaded());
    assert_eq!(viewer.current_page(), 1);
    assert!(viewer.take_effects().is_empty());
}
