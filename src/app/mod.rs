// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced event loop.
//!
//! The `App` owns the flipbook controller and the window host. Every update
//! forwards the message to the controller, then turns the effects the
//! controller requested into tasks.

pub mod host;
mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Input, Message};

use crate::config::{self, paths, Config};
use crate::error::Error;
use crate::flipbook::{Dimensions, FlipbookController, FsImageSource, ImageSource};
use crate::i18n::fluent::I18n;
use crate::ui::book::Book;
use crate::ui::toolbar;
use host::WindowHost;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    controller: FlipbookController<Book>,
    host: WindowHost,
    source: Arc<dyn ImageSource>,
    start_error: Option<Error>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("lifecycle", &self.controller.lifecycle())
            .field("current_page", &self.controller.current_page())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Applies CLI overrides on top of the loaded configuration.
pub fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(lang) = &flags.lang {
        config.general.language = Some(lang.clone());
    }
    if let Some(pages) = flags.pages {
        config.book.page_count = Some(pages);
    }
    if let Some(folder) = &flags.folder {
        config.book.pages_folder = Some(PathBuf::from(folder));
    }
    if let Some(format) = &flags.format {
        config.book.image_format = Some(format.clone());
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (mut config, config_warning) = config::load();
        apply_flags(&mut config, &flags);

        let i18n = I18n::new(flags.lang.clone(), &config);
        if let Some(key) = config_warning {
            warn!("{}", i18n.tr(&key));
        }

        let flipbook_config = config.to_flipbook_config();
        info!(
            pages = flipbook_config.page_count.value(),
            folder = %flipbook_config.assets.folder().display(),
            locale = %i18n.current_locale(),
            "starting flipbook"
        );

        let mut app = App {
            i18n,
            controller: FlipbookController::new(flipbook_config),
            host: WindowHost::new(Dimensions::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            )),
            source: Arc::new(FsImageSource),
            start_error: None,
        };

        if let Err(err) = app.controller.start(&mut app.host) {
            app.start_error = Some(err);
        }

        let task = app.host.tasks(&app.source);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.host.page_info() {
            Some((current, total)) => {
                let label = toolbar::page_label(&self.i18n, current, total);
                format!("{label} - {app_name}")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.host.is_listening())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
            host: &mut self.host,
        };

        match message {
            Message::PageLoaded { cycle, outcome } => {
                ctx.controller.on_page_loaded(ctx.host, cycle, outcome);
            }
            Message::TimerFired(timer) => ctx.controller.on_timer(ctx.host, timer),
            Message::Input { window, input } => update::handle_input(&mut ctx, window, input),
            Message::FullscreenChanged(fullscreen) => {
                update::handle_fullscreen_changed(&mut ctx, fullscreen);
            }
            Message::Toolbar(message) => update::handle_toolbar_message(&mut ctx, message),
            Message::Help(message) => update::handle_help_message(&mut ctx, message),
        }

        self.host.tasks(&self.source)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
            host: &self.host,
            start_error: self.start_error.as_ref(),
        })
    }
}
