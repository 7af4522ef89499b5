use dioxus::{
    desktop::{
        Config, WindowBuilder,
        WindowCloseBehaviour::*,
        muda::Menu,
        tao::{
            dpi::LogicalSize,
            window::{Fullscreen, Theme},
        },
    },
    prelude::*,
};
use folio_core::{
    application,
    extension::TomlTableExt,
    state::{Env, State},
};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tokio::runtime::Builder;

/// A webview-based desktop renderer for the Dioxus VirtualDom,
/// configured from the `[window]` and `[desktop]` tables.
pub struct Desktop {
    /// The application name.
    app_name: &'static str,
    /// The shared application state.
    state: &'static State,
    /// Root element.
    root: fn() -> Element,
    /// A flag to enable the right-click context menu.
    enable_context_menu: bool,
}

impl Desktop {
    /// Boots the application with the default initialization.
    pub fn boot(app_name: &'static str) -> Self {
        let state = application::boot(app_name);
        Self {
            app_name,
            state,
            root: VoidRoot,
            enable_context_menu: cfg!(debug_assertions),
        }
    }

    /// Sets the root element.
    #[inline]
    pub fn with_root(mut self, root: fn() -> Element) -> Self {
        self.root = root;
        self
    }

    /// Enables the right-click context menu.
    #[inline]
    pub fn enable_context_menu(mut self) -> Self {
        self.enable_context_menu = true;
        self
    }

    /// Returns the application env.
    #[inline]
    pub fn env(&self) -> &'static Env {
        self.state.env()
    }

    /// Formats a local path as the Dioxus href.
    pub fn format_local_path(path: &Path) -> String {
        let path = path.to_string_lossy();
        if cfg!(target_os = "windows") && !path.is_empty() {
            format!("http://dioxus.{}", path.replace('\\', "/"))
        } else {
            path.into_owned()
        }
    }

    /// Formats a stylesheet or script reference, resolving local paths
    /// against the current directory.
    fn format_resource(resource: &str) -> String {
        if resource.starts_with("https://") || resource.starts_with("http://") {
            resource.to_owned()
        } else {
            Self::format_local_path(&parse_path(resource))
        }
    }

    /// Builds the window from the `[window]` table.
    fn window_builder(&self) -> (WindowBuilder, bool) {
        let mut disable_menu = false;
        let mut app_window = WindowBuilder::new()
            .with_title(self.app_name)
            .with_maximized(true)
            .with_focused(true);
        if let Some(config) = self.state.get_config("window") {
            if let Some(title) = config.get_str("title") {
                app_window = app_window.with_title(title);
            }
            if let Some(value) = config.get("disable-menu") {
                if value.as_bool().is_some_and(|b| b) {
                    disable_menu = true;
                } else if value.as_str().is_some_and(|s| s == "auto") {
                    disable_menu = !cfg!(target_os = "macos");
                }
            }
            if config.get_bool("fullscreen").is_some_and(|b| b) {
                app_window = app_window.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }
            if let Some(maximized) = config.get_bool("maximized") {
                app_window = app_window.with_maximized(maximized);
            }
            if let (Some(width), Some(height)) = (config.get_f64("width"), config.get_f64("height"))
            {
                app_window = app_window
                    .with_inner_size(LogicalSize::new(width, height));
            }
            if let Some(resizable) = config.get_bool("resizable") {
                app_window = app_window.with_resizable(resizable);
            }
            if let Some(focused) = config.get_bool("focused") {
                app_window = app_window.with_focused(focused);
            }
            if let Some(decorations) = config.get_bool("decorations") {
                app_window = app_window.with_decorations(decorations);
            }
            if let Some(always_on_top) = config.get_bool("always-on-top") {
                app_window = app_window.with_always_on_top(always_on_top);
            }
            if let Some(theme) = config.get_str("theme") {
                let (theme, background_color) = if theme == "Dark" {
                    (Theme::Dark, (0, 0, 0, 255))
                } else {
                    (Theme::Light, (255, 255, 255, 255))
                };
                app_window = app_window
                    .with_theme(Some(theme))
                    .with_background_color(background_color);
            }
        }
        (app_window, disable_menu)
    }

    /// Builds the desktop config from the `[desktop]` table.
    fn desktop_config(&self) -> Config {
        let (app_window, disable_menu) = self.window_builder();
        let mut desktop_config = Config::new()
            .with_window(app_window)
            .with_disable_context_menu(!self.enable_context_menu)
            .with_disable_drag_drop_handler(cfg!(target_os = "windows"));
        if disable_menu {
            desktop_config = desktop_config.with_menu(None::<Menu>);
        }

        let mut custom_heads = vec![r#"<meta charset="UTF-8">"#.to_owned()];
        if let Some(config) = self.state.get_config("desktop") {
            if let Some(stylesheets) = config.get_str_array("stylesheets") {
                for style in stylesheets {
                    let href = Self::format_resource(style);
                    custom_heads.push(format!(r#"<link rel="stylesheet" href="{href}">"#));
                }
            }
            if let Some(scripts) = config.get_str_array("scripts") {
                for script in scripts {
                    let src = Self::format_resource(script);
                    custom_heads.push(format!(r#"<script src="{src}"></script>"#));
                }
            }
            if let Some(dir) = config.get_str("resource-dir") {
                desktop_config = desktop_config.with_resource_directory(parse_path(dir));
            }
            if let Some(dir) = config.get_str("data-dir") {
                desktop_config = desktop_config.with_data_directory(parse_path(dir));
            }
            if let Some(custom_index) = config.get_str("custom-index") {
                let index_file = parse_path(custom_index);
                match fs::read_to_string(&index_file) {
                    Ok(custom_index) => {
                        desktop_config = desktop_config.with_custom_index(custom_index);
                    }
                    Err(err) => {
                        let index_file = index_file.display();
                        tracing::error!("fail to read the index html file `{index_file}`: {err}");
                    }
                }
            }
            if let Some(name) = config.get_str("root-name") {
                desktop_config = desktop_config.with_root_name(name);
            }
            if let Some(behaviour) = config.get_str("close-behaviour") {
                let behaviour = match behaviour {
                    "CloseWindow" => CloseWindow,
                    "LastWindowHides" => LastWindowHides,
                    _ => LastWindowExitsApp,
                };
                desktop_config = desktop_config.with_close_behaviour(behaviour);
            }
        }
        desktop_config.with_custom_head(custom_heads.join("\n"))
    }

    /// Runs the application until the last window is closed.
    pub fn run(self) {
        let runtime = match Builder::new_multi_thread()
            .thread_keep_alive(Duration::from_secs(60))
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("fail to build Tokio runtime for Dioxus desktop: {err}");
                return;
            }
        };
        let desktop_config = self.desktop_config();
        tracing::warn!(
            app_env = self.env().as_str(),
            app_name = self.app_name,
            folio_version = env!("CARGO_PKG_VERSION"),
            "launch the desktop window",
        );

        let vdom = VirtualDom::new(self.root);
        runtime.block_on(tokio::task::unconstrained(async move {
            dioxus::desktop::launch::launch_virtual_dom_blocking(vdom, desktop_config)
        }));
    }
}

/// Parses an absolute path, or a path relative to the current dir.
fn parse_path(path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

/// An empty root used until one is provided.
fn VoidRoot() -> Element {
    rsx! {}
}
