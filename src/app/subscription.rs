// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Until the controller attaches its listeners only window events are
//! routed, so the window id and size are known when the book is built.
//! Afterwards keyboard, touch and mouse-drag input is routed too.

use super::message::{Input, Message};
use crate::flipbook::{Dimensions, Key, Modifiers, Point};
use iced::keyboard::{self, key::Named};
use iced::{event, mouse, touch, window, Event, Subscription};

pub fn create_event_subscription(listening: bool) -> Subscription<Message> {
    if listening {
        event::listen_with(route_input)
    } else {
        event::listen_with(route_window)
    }
}

fn route_window(event: Event, _status: event::Status, window: window::Id) -> Option<Message> {
    let input = window_input(&event)?;
    Some(Message::Input { window, input })
}

fn route_input(event: Event, status: event::Status, window: window::Id) -> Option<Message> {
    let input = match &event {
        Event::Window(_) => window_input(&event),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            // Widgets that captured the key keep it.
            if status == event::Status::Captured {
                return None;
            }
            Some(Input::Key {
                key: convert_key(key),
                modifiers: Modifiers {
                    command: modifiers.command(),
                },
            })
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            (status == event::Status::Ignored).then(|| Input::PointerPressed(Some(to_point(*position))))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Input::PointerReleased(Some(to_point(*position))))
        }
        Event::Touch(touch::Event::FingerLost { .. }) => Some(Input::PointerLost),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Input::PointerMoved(to_point(*position)))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            // Clicks on toolbar buttons are captured and must not start a drag.
            (status == event::Status::Ignored).then_some(Input::PointerPressed(None))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Input::PointerReleased(None))
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Input::PointerLost),
        _ => None,
    }?;
    Some(Message::Input { window, input })
}

fn window_input(event: &Event) -> Option<Input> {
    match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Input::Resized(Dimensions::new(size.width, size.height)))
        }
        _ => None,
    }
}

fn to_point(position: iced::Point) -> Point {
    Point::new(position.x, position.y)
}

/// Maps an Iced key to the keys the flipbook understands.
pub fn convert_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(Named::ArrowRight) => Key::ArrowRight,
        keyboard::Key::Named(Named::Home) => Key::Home,
        keyboard::Key::Named(Named::End) => Key::End,
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Named(Named::F11) => Key::F11,
        keyboard::Key::Character(c) => c.chars().next().map_or(Key::Other, Key::Character),
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_are_converted() {
        assert_eq!(
            convert_key(&keyboard::Key::Named(Named::ArrowRight)),
            Key::ArrowRight
        );
        assert_eq!(convert_key(&keyboard::Key::Named(Named::F11)), Key::F11);
        assert_eq!(convert_key(&keyboard::Key::Named(Named::Tab)), Key::Other);
    }

    #[test]
    fn character_keys_keep_their_char() {
        assert_eq!(
            convert_key(&keyboard::Key::Character("f".into())),
            Key::Character('f')
        );
    }

    #[test]
    fn window_resize_becomes_input() {
        let event = Event::Window(window::Event::Resized(iced::Size::new(1024.0, 700.0)));
        assert_eq!(
            window_input(&event),
            Some(Input::Resized(Dimensions::new(1024.0, 700.0)))
        );
    }
}
