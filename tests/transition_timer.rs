// SPDX-License-Identifier: MPL-2.0
//! The host-side transition timer against a paused tokio clock.

use std::time::Duration;
use studio_lightbox::domain::photo::Photo;
use studio_lightbox::ui::viewer::component::{Effect, Message};
use studio_lightbox::ui::viewer::timer::{self, TransitionTimer};
use studio_lightbox::{ViewerCallbacks, ViewerProps, ViewerShell};

fn open_viewer(count: usize) -> ViewerShell {
    let photos: Vec<Photo> = (0..count)
        .map(|i| Photo::new(format!("{i}"), format!("https://cdn/{i}.jpg"), format!("{i}.jpg")))
        .collect();
    ViewerShell::new(ViewerProps::new(photos).open_at(0), ViewerCallbacks::default()).0
}

#[tokio::test(start_paused = true)]
async fn transition_commits_after_the_delay() {
    let mut viewer = open_viewer(3);
    let (mut timer, mut elapsed) = TransitionTimer::new();

    timer.apply(&viewer.next());
    assert_eq!(timer.pending(), 1);

    tokio::time::sleep(Duration::from_millis(149)).await;
    assert!(elapsed.try_recv().is_err());
    assert_eq!(viewer.current_index(), 0);

    let token = elapsed.recv().await.expect("timer delivers the token");
    viewer.handle(Message::TransitionElapsed(token));
    assert_eq!(viewer.current_index(), 1);
    assert!(!viewer.is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn closing_cancels_the_pending_timer() {
    let mut viewer = open_viewer(3);
    let (mut timer, mut elapsed) = TransitionTimer::new();

    timer.apply(&viewer.next());
    let effects = viewer.close();
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::CancelTransition { .. })));
    timer.apply(&effects);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(elapsed.try_recv().is_err());
    assert_eq!(timer.pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_timer_aborts_everything() {
    let mut viewer = open_viewer(3);
    let (mut timer, mut elapsed) = TransitionTimer::new();
    timer.apply(&viewer.next());

    drop(timer);

    assert_eq!(elapsed.recv().await, None);
    assert_eq!(viewer.current_index(), 0);
    assert!(viewer
        .teardown()
        .iter()
        .any(|effect| matches!(effect, Effect::CancelTransition { .. })));
}

#[tokio::test(start_paused = true)]
async fn elapsed_yields_its_token() {
    let mut viewer = open_viewer(2);
    let token = viewer.next().iter().find_map(|effect| match effect {
        Effect::ScheduleTransition { token, .. } => Some(*token),
        _ => None,
    });
    let token = token.expect("transition scheduled");

    let start = tokio::time::Instant::now();
    assert_eq!(timer::elapsed(token, Duration::from_millis(150)).await, token);
    assert!(start.elapsed() >= Duration::from_millis(150));
}
