use crate::{extension::TomlTableExt, state::State};
use std::{fs, io, path::PathBuf, sync::OnceLock};
use tracing::Level;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::writer::MakeWriterExt,
    layer::SubscriberExt,
};

/// Initializes the tracing subscriber.
pub(super) fn init(app_name: &str, state: &State) {
    if TRACING_APPENDER_GUARD.get().is_some() {
        tracing::warn!("tracing subscriber has already been initialized");
        return;
    }

    let app_env = state.env();
    let in_dev_mode = app_env.is_dev();
    let mut event_format = if in_dev_mode { "pretty" } else { "json" };
    let mut level_filter = if in_dev_mode {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let mut stdout_max_level = if in_dev_mode {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let mut env_filter = if in_dev_mode {
        "info,folio=debug,folio_core=debug,folio_dioxus=debug"
    } else {
        "warn,folio=info"
    };

    let mut log_dir = "logs";
    let mut log_rotation = "daily";
    let mut max_log_files = 30;
    let mut ansi_terminal = true;
    let mut display_target = true;
    let mut display_filename = false;
    let mut display_line_number = false;
    let mut display_thread_names = false;
    let mut flatten_event = false;
    if let Some(config) = state.get_config("tracing") {
        if let Some(dir) = config.get_str("log-dir") {
            log_dir = dir;
        }
        if let Some(rotation) = config.get_str("log-rotation") {
            log_rotation = rotation;
        }
        if let Some(max_files) = config.get_usize("max-log-files") {
            max_log_files = max_files.max(1);
        }
        if let Some(format) = config.get_str("format") {
            event_format = format;
        }
        if let Some(level) = config.get_str("level") {
            stdout_max_level = level.parse().expect("fail to parse the level");
            level_filter = level.parse().expect("fail to parse the level filter");
        }
        if let Some(filter) = config.get_str("filter") {
            env_filter = filter;
        }
        ansi_terminal = config.get_bool("ansi").unwrap_or(true);
        display_target = config.get_bool("display-target").unwrap_or(true);
        display_filename = config.get_bool("display-filename").unwrap_or(in_dev_mode);
        display_line_number = config
            .get_bool("display-line-number")
            .unwrap_or(in_dev_mode);
        display_thread_names = config.get_bool("display-thread-names").unwrap_or(false);
        flatten_event = config.get_bool("flatten-event").unwrap_or(false);
    }

    let log_dir = PathBuf::from(log_dir);
    if !log_dir.exists() {
        fs::create_dir_all(&log_dir).unwrap_or_else(|err| {
            let log_dir = log_dir.display();
            panic!("fail to create the log directory `{log_dir}`: {err}");
        });
    }

    let rotation = match log_rotation {
        "minutely" => Rotation::MINUTELY,
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    };
    let file_appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(format!("{app_name}.{app_env}"))
        .filename_suffix("log")
        .max_log_files(max_log_files)
        .build(log_dir)
        .expect("fail to initialize the rolling file appender");
    let (non_blocking_appender, worker_guard) = tracing_appender::non_blocking(file_appender);

    // Format layer
    let stdout = io::stdout.with_max_level(stdout_max_level);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(ansi_terminal)
        .with_target(display_target)
        .with_file(display_filename)
        .with_line_number(display_line_number)
        .with_thread_names(display_thread_names)
        .with_writer(stdout.and(non_blocking_appender));

    let env_filter_layer = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .parse(env_filter)
        .expect("fail to parse the env filter");
    let subscriber = tracing_subscriber::registry().with(env_filter_layer);
    match event_format {
        "compact" => {
            let subscriber = subscriber.with(fmt_layer.compact());
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!(
                    "fail to set the default subscriber with a `Compact` formatter: {err}"
                );
            }
        }
        "json" => {
            let json_fmt_layer = fmt_layer
                .json()
                .flatten_event(flatten_event)
                .with_current_span(true);
            let subscriber = subscriber.with(json_fmt_layer);
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!("fail to set the default subscriber with a `Json` formatter: {err}");
            }
        }
        "pretty" => {
            let subscriber = subscriber.with(fmt_layer.pretty());
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!(
                    "fail to set the default subscriber with a `Pretty` formatter: {err}"
                );
            }
        }
        _ => {
            let subscriber = subscriber.with(fmt_layer);
            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                tracing::warn!("fail to set the default subscriber with a `Full` formatter: {err}");
            }
        }
    }
    if TRACING_APPENDER_GUARD.set(worker_guard).is_err() {
        tracing::warn!("fail to set the worker guard for the tracing appender");
    }
}

/// Tracing appender guard.
static TRACING_APPENDER_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
