// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate log;

use core::{
    fmt::{self, Write},
    str::FromStr,
};

#[cfg(not(feature = "std"))]
use crate_interface::call_interface;
use log::{Level, LevelFilter, Log, Metadata, Record};
pub use log::{debug, error, info, trace, warn};


#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {
        $crate::print_fmt(format_args!($($arg)*)).unwrap();
    }
}

#[macro_export]
macro_rules! kprintln {
    () => { $crate::kprint!("\n") };
    ($($arg:tt)*) => {
        $crate::print_fmt(format_args!("{}\n", format_args!($($arg)*))).unwrap();
    }
}

macro_rules! color_fmt {
    ($color_code:expr, $($arg:tt)*) => {
        format_args!("\u{1B}[{}m{}\u{1B}[m", $color_code as u8, format_args!($($arg)*))
    };
}

#[repr(u8)]
#[allow(dead_code)]
enum AnsiColor {
    Black         = 30,
    Red           = 31,
    Green         = 32,
    Yellow        = 33,
    Blue          = 34,
    Magenta       = 35,
    Cyan          = 36,
    White         = 37,
    BrightBlack   = 90,
    BrightRed     = 91,
    BrightGreen   = 92,
    BrightYellow  = 93,
    BrightBlue    = 94,
    BrightMagenta = 95,
    BrightCyan    = 96,
    BrightWhite   = 97,
}

/// The line sink the host supplies: raw text output plus a clock for the
/// line prefix.
#[crate_interface::def_interface]
pub trait LogSink {
    fn write_str(s: &str);
    fn now() -> core::time::Duration;
}

struct KtxLogger;

impl Write for KtxLogger {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                std::print!("{s}");
            } else {
                call_interface!(LogSink::write_str, s);
            }
        }
        Ok(())
    }
}

impl Log for KtxLogger {
    #[inline]
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level();
        let line = record.line().unwrap_or(0);
        let path = record.target();
        let color = match level {
            Level::Error => AnsiColor::Red,
            Level::Warn => AnsiColor::Yellow,
            Level::Info => AnsiColor::Green,
            Level::Debug => AnsiColor::Cyan,
            Level::Trace => AnsiColor::BrightBlack,
        };

        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                let _ = print_fmt(color_fmt!(
                    AnsiColor::White,
                    "[{time} {path}:{line}] {args}\n",
                    time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
                    path = path,
                    line = line,
                    args = color_fmt!(color, "{}", record.args()),
                ));
            } else {
                let now = call_interface!(LogSink::now);
                let _ = print_fmt(color_fmt!(
                    AnsiColor::White,
                    "[{:>3}.{:06} {path}:{line}] {args}\n",
                    now.as_secs(),
                    now.subsec_micros(),
                    path = path,
                    line = line,
                    args = color_fmt!(color, "{}", record.args()),
                ));
            }
        }
    }

    fn flush(&self) {}
}

pub fn print_fmt(args: fmt::Arguments) -> fmt::Result {
    static LOCK: spin::Mutex<()> = spin::Mutex::new(());

    let _guard = LOCK.lock();
    KtxLogger.write_fmt(args)
}

pub fn init_ktxlog() {
    log::set_logger(&KtxLogger).unwrap();
    log::set_max_level(LevelFilter::Info);
}

pub fn set_log_level(level: &str) {
    let lf = LevelFilter::from_str(level)
        .ok()
        .unwrap_or(LevelFilter::Off);
    log::set_max_level(lf);
}
