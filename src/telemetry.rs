use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{LoggingConfig, OutputConfig};
use crate::Result;

/// Installs the global subscriber. Log lines go to stderr so the demo
/// output on stdout stays readable.
pub fn init(logging: &LoggingConfig, output: &OutputConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter(logging))
        .with(fmt_layer(output, std::io::stderr))
        .try_init()?;
    Ok(())
}

fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// ANSI styling follows `output.color`, same as the demo text.
fn fmt_layer<S, W>(output: &OutputConfig, writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(output.color)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn log_with(output: &OutputConfig) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(fmt_layer(output, captured.clone()));
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(operation = "fax", "operation not supported");
        });
        captured.text()
    }

    #[test]
    fn test_color_off_writes_plain_lines() {
        let text = log_with(&OutputConfig { color: false });
        assert!(text.contains("operation not supported"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_color_on_writes_ansi_styling() {
        let text = log_with(&OutputConfig { color: true });
        assert!(text.contains('\u{1b}'));
    }

    #[test]
    fn test_only_first_init_succeeds() {
        let logging = LoggingConfig::default();
        let output = OutputConfig::default();

        // The only global install in this test binary.
        assert!(init(&logging, &output).is_ok());
        assert!(matches!(
            init(&logging, &output),
            Err(crate::Error::Telemetry(_))
        ));
    }
}
