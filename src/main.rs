use std::io::{self, BufRead};
use std::thread;

use hm_discounts::{Exit, Session};
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into()))
        .with_writer(io::stderr)
        .init();

    let (line_sender, line_receiver) = tokio::sync::mpsc::channel(16);

    // A plain thread, so a read still blocked on stdin never holds up exit
    let reader = thread::spawn(move || -> io::Result<()> {
        for line in io::stdin().lock().split(b'\n') {
            // invalid UTF-8 becomes an unparseable line rather than ending input
            let bytes = line?;
            let line = String::from_utf8_lossy(&bytes);
            let line = line.strip_suffix('\r').unwrap_or(&line).to_string();
            if line_sender.blocking_send(line).is_err() {
                break;
            }
        }
        Ok(())
    });

    let mut session = Session::new(io::stdout());
    session.preamble()?;
    let exit = session.run(ReceiverStream::new(line_receiver)).await?;
    debug!(?exit, "session ended");

    // input only runs out once the reader has returned
    if exit == Exit::EndOfInput {
        reader
            .join()
            .map_err(|_| io::Error::other("stdin reader panicked"))??;
    }

    Ok(())
}
