use chrono::Local;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 1000;

/// A log entry with timestamp and message
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: Level, target: &str, message: String) -> Self {
        Self {
            timestamp: Local::now().format("%H:%M:%S.%3f").to_string(),
            level: level.to_string().to_uppercase(),
            target: target.to_string(),
            message,
        }
    }

    /// Format for display in the log panel
    pub fn format_for_display(&self) -> String {
        format!(
            "[{}] {} [{}] {}",
            self.timestamp, self.level, self.target, self.message
        )
    }
}

/// Thread-safe ring buffer for log entries
#[derive(Debug, Clone, Default)]
pub struct LogRingBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogRingBuffer {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES))),
        }
    }

    pub fn push(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= MAX_LOG_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    pub fn get_recent(&self, count: usize) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.iter().rev().take(count).rev().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Custom writer that captures logs to our ring buffer
#[derive(Clone)]
pub struct RingBufferWriter {
    buffer: LogRingBuffer,
}

impl RingBufferWriter {
    pub fn new(buffer: LogRingBuffer) -> Self {
        Self { buffer }
    }
}

/// Split a compact-format line "LEVEL target: message" into its parts
fn parse_compact_line(line: &str) -> (Level, &str, &str) {
    let levels = [
        ("TRACE ", Level::TRACE),
        ("DEBUG ", Level::DEBUG),
        ("INFO ", Level::INFO),
        ("WARN ", Level::WARN),
        ("ERROR ", Level::ERROR),
    ];

    let Some((level, rest)) = levels.iter().find_map(|(prefix, level)| {
        line.trim_start()
            .strip_prefix(prefix)
            .map(|rest| (*level, rest.trim_start()))
    }) else {
        return (Level::INFO, "general", line);
    };

    // A target has no spaces before its colon
    match rest.split_once(':') {
        Some((target, msg)) if !target.contains(' ') => (level, target, msg.trim()),
        _ => (level, "general", rest),
    }
}

impl std::io::Write for RingBufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(message) = std::str::from_utf8(buf) {
            let message = message.trim();
            if !message.is_empty() {
                let (level, target, msg) = parse_compact_line(message);
                self.buffer
                    .push(LogEntry::new(level, target, msg.to_string()));
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RingBufferWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Global log buffer accessible throughout the application
static LOG_BUFFER: OnceLock<LogRingBuffer> = OnceLock::new();

/// Initialize the global log buffer (idempotent)
pub fn init_log_buffer() -> LogRingBuffer {
    LOG_BUFFER.get_or_init(LogRingBuffer::new).clone()
}

/// Get the global log buffer
pub fn get_log_buffer() -> Option<LogRingBuffer> {
    LOG_BUFFER.get().cloned()
}

/// Initialize tracing with our ring buffer writer.
///
/// `RUST_LOG` overrides the default `info` filter. Calling this twice keeps
/// the first subscriber.
pub fn init_tracing() -> LogRingBuffer {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let buffer = init_log_buffer();
    let writer = RingBufferWriter::new(buffer.clone());

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .without_time() // We add our own timestamps
        .compact();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::info!(target: "system", "Tracing initialized");
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_ring_buffer_caps_entries() {
        let buffer = LogRingBuffer::new();
        for i in 0..(MAX_LOG_ENTRIES + 10) {
            buffer.push(LogEntry::new(Level::INFO, "test", format!("msg {}", i)));
        }
        assert_eq!(buffer.len(), MAX_LOG_ENTRIES);

        let recent = buffer.get_recent(2);
        assert_eq!(recent[0].message, format!("msg {}", MAX_LOG_ENTRIES + 8));
        assert_eq!(recent[1].message, format!("msg {}", MAX_LOG_ENTRIES + 9));

        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_writer_parses_compact_lines() {
        let buffer = LogRingBuffer::new();
        let mut writer = RingBufferWriter::new(buffer.clone());

        writer.write_all(b"DEBUG pagination: page 2 of 3\n").unwrap();
        writer.write_all(b"  WARN table_view: row 4 padded\n").unwrap();
        writer.write_all(b"plain text line\n").unwrap();

        let entries = buffer.get_recent(3);
        assert_eq!(entries[0].level, "DEBUG");
        assert_eq!(entries[0].target, "pagination");
        assert_eq!(entries[0].message, "page 2 of 3");
        assert_eq!(entries[1].level, "WARN");
        assert_eq!(entries[1].target, "table_view");
        assert_eq!(entries[2].target, "general");
        assert_eq!(entries[2].message, "plain text line");
    }

    #[test]
    fn test_message_with_spaces_before_colon_is_general() {
        let (level, target, msg) = parse_compact_line("INFO loaded rows: 12");
        assert_eq!(level, Level::INFO);
        assert_eq!(target, "general");
        assert_eq!(msg, "loaded rows: 12");
    }
}
