// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Handlers mutate the controller and host only. The tasks produced by the
//! host's recorded commands are collected by `App::update` afterwards.

use super::host::WindowHost;
use super::message::Input;
use crate::flipbook::{FlipbookController, Host, Listener, NavCommand, PageNumber, PageTurner};
use crate::ui::{help, toolbar};
use iced::window;
use tracing::debug;

/// Borrowed application state handed to every handler.
pub struct UpdateContext<'a, T: PageTurner> {
    pub controller: &'a mut FlipbookController<T>,
    pub host: &'a mut WindowHost,
}

pub fn handle_input<T: PageTurner>(ctx: &mut UpdateContext<'_, T>, window: window::Id, input: Input) {
    ctx.host.set_window(window);

    match input {
        Input::Resized(size) => {
            ctx.host.set_window_size(size);
            ctx.controller.on_window_resized(ctx.host);
        }
        Input::Key { key, modifiers } => {
            if !ctx.controller.handle_key(ctx.host, key, modifiers) {
                debug!(?key, "key not handled");
            }
        }
        Input::PointerMoved(position) => ctx.host.set_cursor(position),
        Input::PointerPressed(position) => {
            if let Some(position) = position.or(ctx.host.cursor()) {
                ctx.controller.touch_start(position);
            }
        }
        Input::PointerReleased(position) => match position.or(ctx.host.cursor()) {
            Some(position) => {
                ctx.controller.touch_end(ctx.host, position);
            }
            None => ctx.controller.touch_cancel(),
        },
        Input::PointerLost => ctx.controller.touch_cancel(),
    }
}

pub fn handle_toolbar_message<T: PageTurner>(
    ctx: &mut UpdateContext<'_, T>,
    message: toolbar::Message,
) {
    if !ctx.host.is_subscribed(Listener::Toolbar) {
        debug!(?message, "toolbar not attached yet");
        return;
    }

    let command = match message {
        toolbar::Message::First => Some(NavCommand::GoTo(PageNumber::FIRST)),
        toolbar::Message::Previous => Some(NavCommand::Previous),
        toolbar::Message::Next => Some(NavCommand::Next),
        toolbar::Message::Last => ctx.controller.page_count().last().map(NavCommand::GoTo),
        toolbar::Message::ToggleFullscreen => {
            ctx.controller.toggle_fullscreen(ctx.host);
            None
        }
        toolbar::Message::ShowHelp => {
            ctx.controller.show_instructions(ctx.host);
            None
        }
    };

    if let Some(command) = command {
        ctx.controller.dispatch(ctx.host, command);
    }
}

pub fn handle_help_message<T: PageTurner>(ctx: &mut UpdateContext<'_, T>, message: help::Message) {
    match message {
        help::Message::Close => {
            if ctx.host.is_help_visible() {
                ctx.controller.hide_instructions(ctx.host);
            }
        }
    }
}

pub fn handle_fullscreen_changed<T: PageTurner>(ctx: &mut UpdateContext<'_, T>, fullscreen: bool) {
    ctx.host.set_fullscreen(fullscreen);
    ctx.controller.on_fullscreen_change(ctx.host, fullscreen);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flipbook::testing::{loaded, FakeTurner};
    use crate::flipbook::{
        AssetTemplate, Dimensions, FlipbookConfig, Key, Modifiers, Point, Timer,
    };
    use crate::app::host::HostCommand;

    fn ready() -> (FlipbookController<FakeTurner>, WindowHost) {
        let mut controller =
            FlipbookController::new(FlipbookConfig::new(5, AssetTemplate::new("pages", "png")));
        let mut host = WindowHost::new(Dimensions::new(800.0, 650.0));
        controller.start(&mut host).unwrap();
        let cycle = controller.cycle();
        for n in 1..=5 {
            controller.on_page_loaded(&mut host, cycle, loaded(n));
        }
        let settle = host.take_commands().into_iter().find_map(|command| match command {
            HostCommand::Schedule {
                timer: timer @ Timer::SettleDelay(_),
                ..
            } => Some(timer),
            _ => None,
        });
        controller.on_timer(&mut host, settle.unwrap());
        host.take_commands();
        (controller, host)
    }

    #[test]
    fn toolbar_last_jumps_to_final_page() {
        let (mut controller, mut host) = ready();
        let mut ctx = UpdateContext {
            controller: &mut controller,
            host: &mut host,
        };
        handle_toolbar_message(&mut ctx, toolbar::Message::Last);
        assert_eq!(controller.current_page(), PageNumber::new(5));
        assert_eq!(host.page_info().map(|(p, _)| p.value()), Some(5));
    }

    #[test]
    fn toolbar_is_inert_before_listeners_attach() {
        let mut controller: FlipbookController<FakeTurner> =
            FlipbookController::new(FlipbookConfig::new(5, AssetTemplate::new("pages", "png")));
        let mut host = WindowHost::new(Dimensions::new(800.0, 650.0));
        let mut ctx = UpdateContext {
            controller: &mut controller,
            host: &mut host,
        };
        handle_toolbar_message(&mut ctx, toolbar::Message::ShowHelp);
        assert!(!host.is_help_visible());
    }

    #[test]
    fn mouse_drag_uses_last_cursor_position() {
        let (mut controller, mut host) = ready();
        let window = window::Id::unique();
        let mut ctx = UpdateContext {
            controller: &mut controller,
            host: &mut host,
        };

        handle_input(&mut ctx, window, Input::PointerMoved(Point::new(400.0, 300.0)));
        handle_input(&mut ctx, window, Input::PointerPressed(None));
        handle_input(&mut ctx, window, Input::PointerMoved(Point::new(250.0, 310.0)));
        handle_input(&mut ctx, window, Input::PointerReleased(None));

        assert_eq!(controller.current_page(), PageNumber::new(2));
    }

    #[test]
    fn escape_closes_help_shown_from_toolbar() {
        let (mut controller, mut host) = ready();
        let window = window::Id::unique();
        let mut ctx = UpdateContext {
            controller: &mut controller,
            host: &mut host,
        };

        handle_toolbar_message(&mut ctx, toolbar::Message::ShowHelp);
        assert!(ctx.host.is_help_visible());
        handle_input(
            &mut ctx,
            window,
            Input::Key {
                key: Key::Escape,
                modifiers: Modifiers::default(),
            },
        );
        assert!(!ctx.host.is_help_visible());
    }

    #[test]
    fn fullscreen_toggle_waits_for_window_id() {
        let (mut controller, mut host) = ready();
        let mut ctx = UpdateContext {
            controller: &mut controller,
            host: &mut host,
        };
        handle_toolbar_message(&mut ctx, toolbar::Message::ToggleFullscreen);
        assert!(host.take_commands().is_empty());

        let window = window::Id::unique();
        host.set_window(window);
        let mut ctx = UpdateContext {
            controller: &mut controller,
            host: &mut host,
        };
        handle_toolbar_message(&mut ctx, toolbar::Message::ToggleFullscreen);
        handle_fullscreen_changed(&mut ctx, true);

        assert!(host.fullscreen_icon());
        assert!(controller.is_fullscreen());
        assert!(host.take_commands().contains(&HostCommand::SetFullscreen {
            window,
            fullscreen: true
        }));
    }
}
