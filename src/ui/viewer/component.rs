// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! [`ViewerShell`] composes the sub-components, exposes the open/close/
//! navigate/zoom API, builds the [`ViewModel`] and invokes the caller's
//! callbacks. Every input goes through [`ViewerShell::handle`], which returns
//! the effects the host must carry out (timers, listeners, redraws).

use super::controllers::Controllers;
use super::subcomponents::actions::{Action, BusyFlags};
use super::subcomponents::keyboard::{self, Key};
use super::subcomponents::navigation::{self, TransitionToken};
use super::subcomponents::{gesture, loading, zoom};
use super::subscription::{Listener, ListenerSet};
use super::view::{
    format_counter, format_zoom, Arrows, Aria, CursorHint, Header, HeaderButton,
    HeaderButtonKind, Surface, Thumbnail, ViewModel,
};
use crate::config::{ViewerConfig, TRANSITION_DURATION};
use crate::domain::photo::Photo;
use crate::ui::metadata_panel::InfoPanel;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Inputs supplied by the caller.
#[derive(Debug, Clone)]
pub struct ViewerProps {
    /// Ordered photo collection, shared read-only with the caller.
    pub photos: Arc<[Photo]>,
    /// Index shown when the viewer opens (clamped).
    pub initial_index: usize,
    pub is_open: bool,
    pub busy: BusyFlags,
    /// Info panel visibility when the shell is created.
    pub info_panel_visible: bool,
    pub show_thumbnails: bool,
    pub preload_neighbors: bool,
}

impl ViewerProps {
    #[must_use]
    pub fn new(photos: impl Into<Arc<[Photo]>>) -> Self {
        let defaults = ViewerConfig::default();
        Self {
            photos: photos.into(),
            initial_index: 0,
            is_open: false,
            busy: BusyFlags::default(),
            info_panel_visible: defaults.info_panel_visible(),
            show_thumbnails: defaults.show_thumbnails(),
            preload_neighbors: defaults.preload_neighbors(),
        }
    }

    /// Applies the user's display preferences.
    #[must_use]
    pub fn with_config(mut self, config: &ViewerConfig) -> Self {
        self.info_panel_visible = config.info_panel_visible();
        self.show_thumbnails = config.show_thumbnails();
        self.preload_neighbors = config.preload_neighbors();
        self
    }

    #[must_use]
    pub fn open_at(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self.is_open = true;
        self
    }

    #[must_use]
    pub fn with_busy(mut self, busy: BusyFlags) -> Self {
        self.busy = busy;
        self
    }
}

type PhotoCallback = Box<dyn FnMut(&Photo)>;

/// Caller callbacks for discrete user actions. All optional.
///
/// They report intent only; results come back through [`ViewerProps::busy`]
/// and later prop updates.
#[derive(Default)]
pub struct ViewerCallbacks {
    on_close: Option<Box<dyn FnMut()>>,
    on_download: Option<PhotoCallback>,
    on_delete: Option<PhotoCallback>,
    on_favorite: Option<PhotoCallback>,
}

impl ViewerCallbacks {
    #[must_use]
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_download(mut self, callback: impl FnMut(&Photo) + 'static) -> Self {
        self.on_download = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_delete(mut self, callback: impl FnMut(&Photo) + 'static) -> Self {
        self.on_delete = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_favorite(mut self, callback: impl FnMut(&Photo) + 'static) -> Self {
        self.on_favorite = Some(Box::new(callback));
        self
    }

    fn has(&self, action: Action) -> bool {
        match action {
            Action::Download => self.on_download.is_some(),
            Action::Delete => self.on_delete.is_some(),
            Action::Favorite => self.on_favorite.is_some(),
        }
    }

    fn invoke(&mut self, action: Action, photo: &Photo) {
        let callback = match action {
            Action::Download => self.on_download.as_mut(),
            Action::Delete => self.on_delete.as_mut(),
            Action::Favorite => self.on_favorite.as_mut(),
        };
        if let Some(callback) = callback {
            callback(photo);
        }
    }
}

impl fmt::Debug for ViewerCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewerCallbacks")
            .field("on_close", &self.on_close.is_some())
            .field("on_download", &self.on_download.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .field("on_favorite", &self.on_favorite.is_some())
            .finish()
    }
}

/// Messages emitted by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Open { initial_index: usize },
    /// Close button or programmatic close; notifies `on_close`.
    Close,
    GoTo(usize),
    Next,
    Previous,
    ZoomBy(f32),
    ResetZoom,
    ToggleInfoPanel,
    Gesture(gesture::Message),
    Key(Key),
    /// A scheduled transition timer fired.
    TransitionElapsed(TransitionToken),
    ImageLoaded(usize),
    ImageFailed(usize),
    /// Header action button pressed.
    Action(Action),
}

/// Side effects the host should perform after handling a viewer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Visible state changed; re-render from [`ViewerShell::view`].
    Redraw,
    /// Cancel the browser default for the current event (wheel scroll).
    PreventDefault,
    /// Deliver `token` back as [`Message::TransitionElapsed`] after `delay`.
    ScheduleTransition {
        token: TransitionToken,
        delay: Duration,
    },
    /// Drop the pending timer for `token`.
    CancelTransition { token: TransitionToken },
    Subscribe(Listener),
    Unsubscribe(Listener),
}

/// Whether a close should notify the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    User,
    Props,
}

/// The lightbox.
#[derive(Debug)]
pub struct ViewerShell {
    props: ViewerProps,
    callbacks: ViewerCallbacks,
    controllers: Controllers,
    gesture: gesture::State,
    loading: loading::State,
    info_panel_visible: bool,
    listeners: ListenerSet,
}

impl ViewerShell {
    /// Creates the shell, opening it right away when `props.is_open` is set.
    #[must_use]
    pub fn new(props: ViewerProps, callbacks: ViewerCallbacks) -> (Self, Vec<Effect>) {
        let mut shell = Self {
            controllers: Controllers::new(props.photos.len()),
            info_panel_visible: props.info_panel_visible,
            props,
            callbacks,
            gesture: gesture::State::default(),
            loading: loading::State::default(),
            listeners: ListenerSet::default(),
        };

        let mut effects = Vec::new();
        if shell.props.is_open {
            shell.open_session(shell.props.initial_index, Origin::Props, &mut effects);
        }
        shell.sync_listeners(&mut effects);
        (shell, effects)
    }

    /// Handle a viewer message.
    pub fn handle(&mut self, msg: Message) -> Vec<Effect> {
        let mut effects = Vec::new();
        let redraw = match msg {
            Message::Open { initial_index } => {
                self.open_session(initial_index, Origin::User, &mut effects)
            }
            Message::Close => self.navigate(navigation::Message::Close, &mut effects),
            Message::GoTo(index) => self.navigate(navigation::Message::GoTo(index), &mut effects),
            Message::Next => self.navigate(navigation::Message::Next, &mut effects),
            Message::Previous => self.navigate(navigation::Message::Previous, &mut effects),
            Message::TransitionElapsed(token) => {
                self.navigate(navigation::Message::TransitionElapsed(token), &mut effects)
            }
            Message::ZoomBy(delta) => {
                self.controllers.zoom(zoom::Message::ZoomBy(delta)) == zoom::Effect::ViewChanged
            }
            Message::ResetZoom => {
                self.controllers.zoom(zoom::Message::Reset) == zoom::Effect::ViewChanged
            }
            Message::ToggleInfoPanel => self.toggle_info_panel_flag(),
            Message::Gesture(gesture_msg) => {
                match self.gesture.handle(gesture_msg, &mut self.controllers) {
                    gesture::Effect::None => false,
                    gesture::Effect::ViewChanged => true,
                    gesture::Effect::WheelConsumed { view_changed } => {
                        effects.push(Effect::PreventDefault);
                        view_changed
                    }
                    gesture::Effect::Navigation(effect) => {
                        self.apply_navigation(effect, Origin::User, &mut effects)
                    }
                }
            }
            Message::Key(key) => match keyboard::route(key, &mut self.controllers) {
                keyboard::Effect::Ignored | keyboard::Effect::Handled => false,
                keyboard::Effect::ViewChanged => true,
                keyboard::Effect::Navigation(effect) => {
                    self.apply_navigation(effect, Origin::User, &mut effects)
                }
                keyboard::Effect::ToggleInfoPanel => self.toggle_info_panel_flag(),
            },
            Message::ImageLoaded(index) => {
                self.loading.handle(loading::Message::Loaded(index)) == loading::Effect::Changed
            }
            Message::ImageFailed(index) => {
                self.loading.handle(loading::Message::Failed(index)) == loading::Effect::Changed
            }
            Message::Action(action) => {
                self.trigger(action);
                false
            }
        };

        self.finish(redraw, effects)
    }

    /// Applies new caller inputs.
    ///
    /// Open/close transitions of `is_open` open at `initial_index` or close
    /// without notifying `on_close`. A different photo collection re-clamps the
    /// index and forgets loaded flags; the view resets when another photo ends
    /// up under the current index.
    pub fn update_props(&mut self, props: ViewerProps) -> Vec<Effect> {
        let mut effects = Vec::new();
        let photos_changed = !Arc::ptr_eq(&self.props.photos, &props.photos);
        let was_open = self.props.is_open;
        let shown_id = self.current_photo().map(|photo| photo.id.clone());
        self.props = props;

        if photos_changed {
            self.loading.handle(loading::Message::Reset);
            let effect = self
                .controllers
                .navigate(navigation::Message::SetLen(self.props.photos.len()));
            let index_kept = matches!(
                effect,
                navigation::Effect::Resized {
                    index_changed: false,
                    ..
                }
            );
            let replaced = shown_id.is_some()
                && self.current_photo().map(|photo| photo.id.as_str()) != shown_id.as_deref();
            if index_kept && replaced {
                log::debug!("photo under index {} replaced", self.current_index());
                self.controllers.zoom(zoom::Message::Reset);
                self.gesture.clear();
            }
            self.apply_navigation(effect, Origin::Props, &mut effects);
        }

        if self.props.is_open && !was_open {
            self.open_session(self.props.initial_index, Origin::Props, &mut effects);
        } else if !self.props.is_open && was_open {
            let effect = self.controllers.navigate(navigation::Message::Close);
            self.apply_navigation(effect, Origin::Props, &mut effects);
        }

        self.finish(true, effects)
    }

    /// Releases everything the host holds for the viewer (timers, listeners).
    ///
    /// Call before dropping the shell while it may still be open.
    pub fn teardown(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        let effect = self.controllers.navigate(navigation::Message::Close);
        self.apply_navigation(effect, Origin::Props, &mut effects);
        self.finish(false, effects)
    }

    // =========================================================================
    // Convenience API
    // =========================================================================

    pub fn open(&mut self, initial_index: usize) -> Vec<Effect> {
        self.handle(Message::Open { initial_index })
    }

    pub fn close(&mut self) -> Vec<Effect> {
        self.handle(Message::Close)
    }

    pub fn go_to(&mut self, index: usize) -> Vec<Effect> {
        self.handle(Message::GoTo(index))
    }

    pub fn next(&mut self) -> Vec<Effect> {
        self.handle(Message::Next)
    }

    pub fn previous(&mut self) -> Vec<Effect> {
        self.handle(Message::Previous)
    }

    pub fn zoom_by(&mut self, delta_percent: f32) -> Vec<Effect> {
        self.handle(Message::ZoomBy(delta_percent))
    }

    pub fn reset_zoom(&mut self) -> Vec<Effect> {
        self.handle(Message::ResetZoom)
    }

    pub fn toggle_info_panel(&mut self) -> Vec<Effect> {
        self.handle(Message::ToggleInfoPanel)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Opens at `initial_index`. Reopening on the photo already shown keeps its
    /// loaded flag, since the host will not report that image again.
    fn open_session(
        &mut self,
        initial_index: usize,
        origin: Origin,
        effects: &mut Vec<Effect>,
    ) -> bool {
        let shown = self.is_open().then(|| self.current_index());
        let effect = self
            .controllers
            .navigate(navigation::Message::Open(initial_index));
        if let navigation::Effect::Opened { index, .. } = effect {
            if shown != Some(index) {
                self.loading.handle(loading::Message::MarkPending(index));
            }
        }
        self.apply_navigation(effect, origin, effects)
    }

    fn navigate(&mut self, msg: navigation::Message, effects: &mut Vec<Effect>) -> bool {
        let effect = self.controllers.navigate(msg);
        self.apply_navigation(effect, Origin::User, effects)
    }

    /// Turns a navigation outcome into host effects. Returns whether to redraw.
    fn apply_navigation(
        &mut self,
        effect: navigation::Effect,
        origin: Origin,
        effects: &mut Vec<Effect>,
    ) -> bool {
        match effect {
            navigation::Effect::None => false,
            navigation::Effect::Opened { cancelled, .. } => {
                push_cancel(effects, cancelled);
                self.gesture.clear();
                true
            }
            navigation::Effect::Closed { cancelled } => {
                push_cancel(effects, cancelled);
                self.gesture.clear();
                if origin == Origin::User {
                    if let Some(on_close) = self.callbacks.on_close.as_mut() {
                        on_close();
                    }
                }
                true
            }
            navigation::Effect::TransitionStarted { target, token } => {
                self.loading.handle(loading::Message::MarkPending(target));
                effects.push(Effect::ScheduleTransition {
                    token,
                    delay: TRANSITION_DURATION,
                });
                true
            }
            navigation::Effect::Committed { .. } => true,
            navigation::Effect::Resized {
                index_changed,
                cancelled,
            } => {
                push_cancel(effects, cancelled);
                index_changed || cancelled.is_some()
            }
        }
    }

    fn toggle_info_panel_flag(&mut self) -> bool {
        if !self.controllers.is_open() {
            return false;
        }
        self.info_panel_visible = !self.info_panel_visible;
        true
    }

    fn trigger(&mut self, action: Action) {
        if !self.controllers.is_open() || !self.props.busy.is_enabled(action) {
            log::debug!("{action:?} ignored: viewer closed or action blocked");
            return;
        }
        let photos = Arc::clone(&self.props.photos);
        if let Some(photo) = photos.get(self.controllers.navigation.current_index()) {
            self.callbacks.invoke(action, photo);
        }
    }

    fn finish(&mut self, redraw: bool, mut effects: Vec<Effect>) -> Vec<Effect> {
        self.gesture.reconcile(&self.controllers);
        self.sync_listeners(&mut effects);
        if redraw {
            effects.push(Effect::Redraw);
        }
        effects
    }

    fn sync_listeners(&mut self, effects: &mut Vec<Effect>) {
        let next = ListenerSet::required(self.controllers.is_open(), self.gesture.is_dragging());
        effects.extend(self.listeners.removed(&next).map(Effect::Unsubscribe));
        effects.extend(self.listeners.added(&next).map(Effect::Subscribe));
        self.listeners = next;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controllers.is_open()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.controllers.navigation.current_index()
    }

    #[must_use]
    pub fn current_photo(&self) -> Option<&Photo> {
        if !self.is_open() {
            return None;
        }
        self.props.photos.get(self.current_index())
    }

    #[must_use]
    pub fn photos(&self) -> &Arc<[Photo]> {
        &self.props.photos
    }

    #[must_use]
    pub fn zoom_percent(&self) -> f32 {
        self.controllers.zoom.zoom_percent()
    }

    #[must_use]
    pub fn pan(&self) -> (f32, f32) {
        self.controllers.zoom.pan()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.controllers.navigation.is_transitioning()
    }

    #[must_use]
    pub fn pending_transition(&self) -> Option<TransitionToken> {
        self.controllers.navigation.pending_token()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[must_use]
    pub fn info_panel_visible(&self) -> bool {
        self.info_panel_visible
    }

    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.loading.is_loaded(index)
    }

    /// Listeners the host currently has installed for the viewer.
    #[must_use]
    pub fn listeners(&self) -> ListenerSet {
        self.listeners
    }

    // =========================================================================
    // View
    // =========================================================================

    /// Builds the render model. `None` while closed: nothing is drawn.
    #[must_use]
    pub fn view(&self) -> Option<ViewModel> {
        let photo = self.current_photo()?;
        let index = self.current_index();
        let len = self.props.photos.len();

        Some(ViewModel {
            aria: Aria::default(),
            header: self.header(photo, index, len),
            surface: Surface {
                src: photo.primary_url.clone(),
                alt: photo.filename.clone(),
                transform: self.controllers.zoom.transform(),
                is_loading: !self.loading.is_loaded(index),
                is_transitioning: self.is_transitioning(),
                cursor: self.cursor_hint(),
            },
            info_panel: self
                .info_panel_visible
                .then(|| InfoPanel::for_photo(photo)),
            arrows: (len > 1).then(|| Arrows {
                previous_index: (index + len - 1) % len,
                next_index: (index + 1) % len,
            }),
            thumbnails: self.thumbnails(index, len),
            preload: self.preload(index, len),
        })
    }

    fn header(&self, photo: &Photo, index: usize, len: usize) -> Header {
        let busy = self.props.busy;
        let mut buttons = Vec::with_capacity(5);

        for action in [Action::Favorite, Action::Download, Action::Delete] {
            if !self.callbacks.has(action) {
                continue;
            }
            let aria_label = match action {
                Action::Favorite if busy.is_favorited => "Remove from favorites",
                Action::Favorite => "Add to favorites",
                Action::Download => "Download photo",
                Action::Delete => "Delete photo",
            };
            buttons.push(HeaderButton {
                kind: action.into(),
                aria_label,
                enabled: busy.is_enabled(action),
                active: action == Action::Favorite && busy.is_favorited,
                busy: busy.is_busy(action),
            });
        }

        buttons.push(HeaderButton {
            kind: HeaderButtonKind::Info,
            aria_label: if self.info_panel_visible {
                "Hide photo info"
            } else {
                "Show photo info"
            },
            enabled: true,
            active: self.info_panel_visible,
            busy: false,
        });
        buttons.push(HeaderButton {
            kind: HeaderButtonKind::Close,
            aria_label: "Close viewer",
            enabled: true,
            active: false,
            busy: false,
        });

        Header {
            counter: format_counter(index, len),
            filename: photo.filename.clone(),
            zoom_readout: format_zoom(self.zoom_percent()),
            buttons,
        }
    }

    fn cursor_hint(&self) -> CursorHint {
        if self.gesture.is_dragging() {
            CursorHint::Grabbing
        } else if self.controllers.is_magnified() {
            CursorHint::Grab
        } else {
            CursorHint::ZoomIn
        }
    }

    fn thumbnails(&self, index: usize, len: usize) -> Vec<Thumbnail> {
        if len <= 1 || !self.props.show_thumbnails {
            return Vec::new();
        }
        self.props
            .photos
            .iter()
            .enumerate()
            .map(|(i, photo)| Thumbnail {
                index: i,
                src: photo.thumbnail_src().to_string(),
                alt: photo.filename.clone(),
                is_active: i == index,
            })
            .collect()
    }

    fn preload(&self, index: usize, len: usize) -> Vec<String> {
        if len <= 1 || !self.props.preload_neighbors {
            return Vec::new();
        }
        let mut urls: Vec<String> = Vec::with_capacity(2);
        for neighbour in [(index + 1) % len, (index + len - 1) % len] {
            let url = &self.props.photos[neighbour].primary_url;
            if neighbour != index && !urls.contains(url) {
                urls.push(url.clone());
            }
        }
        urls
    }
}

fn push_cancel(effects: &mut Vec<Effect>, cancelled: Option<TransitionToken>) {
    if let Some(token) = cancelled {
        effects.push(Effect::CancelTransition { token });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::Point;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn photos(count: usize) -> Vec<Photo> {
        (0..count)
            .map(|i| {
                Photo::new(
                    format!("p{i}"),
                    format!("https://cdn/p{i}.jpg"),
                    format!("IMG_{i:04}.jpg"),
                )
            })
            .collect()
    }

    fn open_shell(count: usize, index: usize) -> ViewerShell {
        let props = ViewerProps::new(photos(count)).open_at(index);
        ViewerShell::new(props, ViewerCallbacks::default()).0
    }

    fn scheduled_token(effects: &[Effect]) -> TransitionToken {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::ScheduleTransition { token, .. } => Some(*token),
                _ => None,
            })
            .expect("a transition should be scheduled")
    }

    #[test]
    fn new_open_shell_subscribes_keyboard_and_wheel() {
        let props = ViewerProps::new(photos(3)).open_at(1);
        let (shell, effects) = ViewerShell::new(props, ViewerCallbacks::default());

        assert!(shell.is_open());
        assert_eq!(shell.current_index(), 1);
        assert!(effects.contains(&Effect::Subscribe(Listener::Keyboard)));
        assert!(effects.contains(&Effect::Subscribe(Listener::WheelCapture)));
        assert!(!effects.contains(&Effect::Subscribe(Listener::GlobalPointerUp)));
    }

    #[test]
    fn empty_collection_renders_nothing() {
        let props = ViewerProps::new(Vec::<Photo>::new()).open_at(0);
        let (mut shell, effects) = ViewerShell::new(props, ViewerCallbacks::default());

        assert!(!shell.is_open());
        assert!(effects.is_empty());
        assert!(shell.view().is_none());
        assert!(shell.next().is_empty());
    }

    #[test]
    fn navigation_schedules_timer_and_commits_on_delivery() {
        let mut shell = open_shell(5, 0);
        let effects = shell.next();
        let token = scheduled_token(&effects);
        assert!(effects.contains(&Effect::ScheduleTransition {
            token,
            delay: TRANSITION_DURATION
        }));
        assert_eq!(shell.current_index(), 0);

        shell.handle(Message::TransitionElapsed(token));
        assert_eq!(shell.current_index(), 1);
    }

    #[test]
    fn close_during_transition_cancels_timer() {
        let mut shell = open_shell(5, 0);
        let token = scheduled_token(&shell.go_to(3));

        let effects = shell.close();

        assert!(effects.contains(&Effect::CancelTransition { token }));
        assert!(effects.contains(&Effect::Unsubscribe(Listener::Keyboard)));
        assert!(effects.contains(&Effect::Unsubscribe(Listener::WheelCapture)));

        shell.handle(Message::TransitionElapsed(token));
        assert_eq!(shell.current_index(), 0);
        assert!(!shell.is_open());
    }

    #[test]
    fn escape_invokes_on_close() {
        let closed = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&closed);
        let props = ViewerProps::new(photos(2)).open_at(0);
        let callbacks = ViewerCallbacks::default().on_close(move || *counter.borrow_mut() += 1);
        let (mut shell, _) = ViewerShell::new(props, callbacks);

        shell.handle(Message::Key(Key::Escape));

        assert_eq!(*closed.borrow(), 1);
        assert!(!shell.is_open());
        // Already closed: no second notification.
        shell.handle(Message::Key(Key::Escape));
        shell.close();
        assert_eq!(*closed.borrow(), 1);
    }

    #[test]
    fn props_close_does_not_invoke_on_close() {
        let closed = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&closed);
        let props = ViewerProps::new(photos(2)).open_at(0);
        let callbacks = ViewerCallbacks::default().on_close(move || *flag.borrow_mut() = true);
        let (mut shell, _) = ViewerShell::new(props.clone(), callbacks);

        let effects = shell.update_props(ViewerProps {
            is_open: false,
            ..props
        });

        assert!(!shell.is_open());
        assert!(!*closed.borrow());
        assert!(effects.contains(&Effect::Unsubscribe(Listener::Keyboard)));
    }

    #[test]
    fn props_reopen_uses_new_initial_index() {
        let props = ViewerProps::new(photos(5)).open_at(0);
        let (mut shell, _) = ViewerShell::new(props.clone(), ViewerCallbacks::default());
        shell.update_props(ViewerProps {
            is_open: false,
            ..props.clone()
        });
        shell.update_props(ViewerProps {
            is_open: true,
            initial_index: 3,
            ..props
        });
        assert!(shell.is_open());
        assert_eq!(shell.current_index(), 3);
    }

    #[test]
    fn wheel_prevents_default_and_redraws() {
        let mut shell = open_shell(3, 0);
        let effects = shell.handle(Message::Gesture(gesture::Message::Wheel { delta_y: -1.0 }));
        assert_eq!(effects, vec![Effect::PreventDefault, Effect::Redraw]);
        assert_eq!(shell.zoom_percent(), 120.0);
    }

    #[test]
    fn drag_installs_and_removes_global_pointer_up() {
        let mut shell = open_shell(3, 0);
        shell.zoom_by(100.0);

        let effects = shell.handle(Message::Gesture(gesture::Message::PointerDown(Point::new(
            10.0, 10.0,
        ))));
        assert!(effects.contains(&Effect::Subscribe(Listener::GlobalPointerUp)));
        assert!(shell.is_dragging());

        let effects = shell.handle(Message::Gesture(gesture::Message::GlobalPointerUp));
        assert!(effects.contains(&Effect::Unsubscribe(Listener::GlobalPointerUp)));
        assert!(!shell.is_dragging());
    }

    #[test]
    fn keyboard_reset_mid_drag_releases_global_listener() {
        let mut shell = open_shell(3, 0);
        shell.zoom_by(100.0);
        shell.handle(Message::Gesture(gesture::Message::PointerDown(Point::new(0.0, 0.0))));

        let effects = shell.handle(Message::Key(Key::Character('0')));

        assert!(!shell.is_dragging());
        assert!(effects.contains(&Effect::Unsubscribe(Listener::GlobalPointerUp)));
    }

    #[test]
    fn info_key_toggles_panel() {
        let mut shell = open_shell(2, 0);
        assert!(!shell.info_panel_visible());
        assert!(shell.view().and_then(|view| view.info_panel).is_none());

        shell.handle(Message::Key(Key::Character('I')));
        assert!(shell.info_panel_visible());
        assert!(shell.view().and_then(|view| view.info_panel).is_some());
    }

    #[test]
    fn target_image_is_pending_until_loaded() {
        let mut shell = open_shell(3, 0);
        shell.handle(Message::ImageLoaded(0));
        shell.handle(Message::ImageLoaded(1));
        assert!(shell.is_loaded(1));

        let token = scheduled_token(&shell.next());
        assert!(!shell.is_loaded(1));
        shell.handle(Message::TransitionElapsed(token));

        let view = shell.view().expect("open viewer renders");
        assert!(view.surface.is_loading);

        shell.handle(Message::ImageLoaded(1));
        assert!(!shell.view().expect("open viewer renders").surface.is_loading);
    }

    #[test]
    fn failed_image_keeps_spinner() {
        let mut shell = open_shell(3, 0);
        let effects = shell.handle(Message::ImageFailed(0));
        assert!(!effects.contains(&Effect::Redraw));
        assert!(shell.view().expect("open viewer renders").surface.is_loading);
    }

    #[test]
    fn actions_respect_busy_flags() {
        let downloads = Rc::new(RefCell::new(Vec::new()));
        let deletes = Rc::new(RefCell::new(Vec::new()));
        let (d1, d2) = (Rc::clone(&downloads), Rc::clone(&deletes));
        let props = ViewerProps::new(photos(3)).open_at(2);
        let callbacks = ViewerCallbacks::default()
            .on_download(move |photo| d1.borrow_mut().push(photo.id.clone()))
            .on_delete(move |photo| d2.borrow_mut().push(photo.id.clone()));
        let (mut shell, _) = ViewerShell::new(props.clone(), callbacks);

        shell.handle(Message::Action(Action::Download));
        assert_eq!(*downloads.borrow(), vec!["p2".to_string()]);

        shell.update_props(props.with_busy(BusyFlags {
            is_downloading: true,
            ..BusyFlags::default()
        }));
        shell.handle(Message::Action(Action::Delete));
        shell.handle(Message::Action(Action::Download));
        assert!(deletes.borrow().is_empty());
        assert_eq!(downloads.borrow().len(), 1);

        let view = shell.view().expect("open viewer renders");
        let delete = view
            .header
            .button(HeaderButtonKind::Delete)
            .expect("delete button shown");
        assert!(!delete.enabled);
        let download = view
            .header
            .button(HeaderButtonKind::Download)
            .expect("download button shown");
        assert!(download.busy);
        assert!(view.header.button(HeaderButtonKind::Favorite).is_none());
    }

    #[test]
    fn view_reports_header_surface_and_strip() {
        let mut shell = open_shell(4, 3);
        shell.zoom_by(50.0);
        let view = shell.view().expect("open viewer renders");

        assert_eq!(view.header.counter, "4 / 4");
        assert_eq!(view.header.filename, "IMG_0003.jpg");
        assert_eq!(view.header.zoom_readout, "150%");
        assert_eq!(view.surface.src, "https://cdn/p3.jpg");
        assert_eq!(view.surface.cursor, CursorHint::Grab);
        assert_eq!(
            view.arrows,
            Some(Arrows {
                previous_index: 2,
                next_index: 0
            })
        );
        assert_eq!(view.thumbnails.len(), 4);
        assert!(view.thumbnails[3].is_active);
        assert_eq!(
            view.preload,
            vec!["https://cdn/p0.jpg".to_string(), "https://cdn/p2.jpg".to_string()]
        );
        assert_eq!(view.aria.role, "dialog");
    }

    #[test]
    fn single_photo_hides_arrows_and_strip() {
        let shell = open_shell(1, 0);
        let view = shell.view().expect("open viewer renders");
        assert!(view.arrows.is_none());
        assert!(view.thumbnails.is_empty());
        assert!(view.preload.is_empty());
    }

    #[test]
    fn shrinking_collection_reclamps_index() {
        let props = ViewerProps::new(photos(5)).open_at(4);
        let (mut shell, _) = ViewerShell::new(props.clone(), ViewerCallbacks::default());

        shell.update_props(ViewerProps {
            photos: photos(2).into(),
            ..props
        });

        assert!(shell.is_open());
        assert_eq!(shell.current_index(), 1);
    }

    #[test]
    fn teardown_releases_everything() {
        let mut shell = open_shell(5, 0);
        let token = scheduled_token(&shell.next());

        let effects = shell.teardown();

        assert!(effects.contains(&Effect::CancelTransition { token }));
        assert!(shell.listeners().is_empty());
        assert!(!effects.contains(&Effect::Redraw));
    }

    #[test]
    fn replaced_photo_under_same_index_resets_view() {
        let props = ViewerProps::new(photos(3)).open_at(1);
        let (mut shell, _) = ViewerShell::new(props.clone(), ViewerCallbacks::default());
        shell.zoom_by(100.0);

        // Same records in a fresh collection: nothing changes on screen.
        shell.update_props(ViewerProps {
            photos: photos(3).into(),
            ..props.clone()
        });
        assert_eq!(shell.zoom_percent(), 200.0);

        // p1 deleted: p2 slides into index 1.
        let mut remaining = photos(3);
        remaining.remove(1);
        shell.update_props(ViewerProps {
            photos: remaining.into(),
            ..props
        });
        assert_eq!(shell.current_index(), 1);
        assert_eq!(shell.current_photo().map(|photo| photo.id.as_str()), Some("p2"));
        assert_eq!(shell.zoom_percent(), 100.0);
        assert_eq!(shell.pan(), (0.0, 0.0));
    }

    #[test]
    fn reopening_on_shown_photo_keeps_loaded_flag() {
        let mut shell = open_shell(3, 1);
        shell.handle(Message::ImageLoaded(1));
        shell.handle(Message::ImageLoaded(2));

        shell.handle(Message::Open { initial_index: 1 });
        assert!(shell.is_loaded(1));
        assert!(!shell.view().expect("open viewer renders").surface.is_loading);

        shell.handle(Message::Open { initial_index: 2 });
        assert!(!shell.is_loaded(2));
    }

    #[test]
    fn navigating_mid_drag_releases_global_pointer_up() {
        let mut shell = open_shell(3, 0);
        shell.zoom_by(100.0);
        shell.handle(Message::Gesture(gesture::Message::PointerDown(Point::new(
            0.0, 0.0,
        ))));

        let effects = shell.next();

        assert!(shell.is_transitioning());
        assert!(!shell.is_dragging());
        assert!(effects.contains(&Effect::Unsubscribe(Listener::GlobalPointerUp)));
    }
}
