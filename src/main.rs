use entitykit::{init_logging, load_settings, run, StdioHost, BUILD_DATE, VERSION};
use entitykit_core::{event_bus::event_bus, PluginEvent};
use entitykit_report::Plugin;
use parking_lot::Mutex;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("EntityKit {} (built {})", VERSION, BUILD_DATE);

    let settings = load_settings()?;
    let host = StdioHost::new(std::io::stdout(), true);
    let plugin = Arc::new(Mutex::new(Plugin::new(host, settings)));

    let bus = event_bus();
    Plugin::attach(&plugin, bus);
    bus.publish(PluginEvent::Loaded)?;

    let frames = run(std::io::stdin().lock(), &*plugin, bus)?;
    tracing::info!("Input closed after {} frame(s)", frames);
    Ok(())
}
