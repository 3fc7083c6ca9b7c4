//! Debug driver for the playback controller.
//!
//! Binds a player to a simulated media resource and prints every state
//! change until the track ends, so transport behavior can be inspected
//! without a real host environment.

use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use clap::Parser;
use futures::{Stream, StreamExt};
use tokio::sync::{Mutex, broadcast};
use tokio_stream::wrappers::BroadcastStream;
use tracing::info;
use voxcue::config::Config;
use voxcue::services::playback::{
    BindOptions, MediaResource, PlaybackError, PlaybackService, PlaybackStatus, ResourceEvent,
    TrackSource, Volume,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(name = "voxcue-debug", about = "Drive a simulated preview track end to end")]
struct Args {
    /// Track url for the simulated resource
    #[arg(long, default_value = "https://cdn.example.com/samples/demo.mp3")]
    url: String,

    /// Simulated track length in seconds
    #[arg(long, default_value_t = 12.0)]
    duration_secs: f64,

    /// Delay before the simulated metadata arrives, in milliseconds
    #[arg(long, default_value_t = 300)]
    load_delay_ms: u64,

    /// Reject the first play request, as a host autoplay policy would
    #[arg(long)]
    reject_first_play: bool,

    /// Start playback as soon as the track is ready
    #[arg(long)]
    autoplay: bool,

    /// Print snapshots as JSON instead of the pretty readout
    #[arg(long)]
    json: bool,
}

/// Media resource that advances its own playhead on a timer.
struct SimResource {
    playing: AtomicBool,
    position: Mutex<Duration>,
    rejects: AtomicUsize,
    events_tx: broadcast::Sender<ResourceEvent>,
}

impl SimResource {
    fn new(reject_first_play: bool) -> Arc<Self> {
        let (events_tx, _) = broadcast::channel(64);
        Arc::new(Self {
            playing: AtomicBool::new(false),
            position: Mutex::new(Duration::ZERO),
            rejects: AtomicUsize::new(usize::from(reject_first_play)),
            events_tx,
        })
    }

    fn spawn_driver(resource: Arc<Self>, duration: Duration, load_delay: Duration) {
        tokio::spawn(async move {
            tokio::time::sleep(load_delay).await;
            let _ = resource
                .events_tx
                .send(ResourceEvent::MetadataLoaded { duration });

            let mut ticker = tokio::time::interval(TICK_INTERVAL);
            loop {
                ticker.tick().await;
                if !resource.playing.load(Ordering::SeqCst) {
                    continue;
                }

                let mut position = resource.position.lock().await;
                *position += TICK_INTERVAL;

                if *position >= duration {
                    *position = duration;
                    resource.playing.store(false, Ordering::SeqCst);
                    let _ = resource.events_tx.send(ResourceEvent::Ended);
                } else {
                    let _ = resource.events_tx.send(ResourceEvent::PositionTick {
                        position: *position,
                    });
                }
            }
        });
    }
}

#[async_trait::async_trait]
impl MediaResource for SimResource {
    async fn play(&self) -> Result<(), PlaybackError> {
        if self.rejects.load(Ordering::SeqCst) > 0 {
            self.rejects.fetch_sub(1, Ordering::SeqCst);
            return Err(PlaybackError::PlaybackRejected {
                reason: "simulated autoplay policy".to_string(),
            });
        }

        self.playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn pause(&self) {
        self.playing.store(false, Ordering::SeqCst);
    }

    async fn set_position(&self, position: Duration) {
        *self.position.lock().await = position;
        // Acknowledge promptly, like a real element honoring a seek.
        let _ = self
            .events_tx
            .send(ResourceEvent::PositionTick { position });
    }

    async fn set_gain(&self, _gain: Volume) {}

    fn events(&self) -> Pin<Box<dyn Stream<Item = ResourceEvent> + Send>> {
        BroadcastStream::new(self.events_tx.subscribe())
            .filter_map(|event| async move { event.ok() })
            .boxed()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    voxcue::tracing_config::init()?;
    let args = Args::parse();

    let config = Config::load()?;
    let service = PlaybackService::new(config.playback.into());

    let duration =
        Duration::try_from_secs_f64(args.duration_secs).unwrap_or(Duration::from_secs(12));
    let resource = SimResource::new(args.reject_first_play);
    SimResource::spawn_driver(
        Arc::clone(&resource),
        duration,
        Duration::from_millis(args.load_delay_ms),
    );

    let source = TrackSource {
        url: args.url.clone(),
        title: Some("Simulated sample".to_string()),
        artist: Some("voxcue-debug".to_string()),
        cover_image_url: None,
    };
    let options = BindOptions {
        autoplay: args.autoplay,
        on_ended: Some(Arc::new(|| info!("track completed"))),
    };

    let player = service
        .bind(source, Arc::clone(&resource) as Arc<dyn MediaResource>, options)
        .await?;

    let mut changes = player.watch();
    while let Some(current) = changes.next().await {
        let snapshot = current.snapshot();

        if args.json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            let muted = if snapshot.muted { " (muted)" } else { "" };
            println!(
                "{:<8} {} / {}  volume {:>3.0}%{}",
                snapshot.status.to_string(),
                snapshot.position_display(),
                snapshot.duration_display(),
                snapshot.volume.as_percentage(),
                muted
            );
        }

        match snapshot.status {
            PlaybackStatus::Ready if !args.autoplay => player.play().await,
            PlaybackStatus::Ended | PlaybackStatus::Errored => break,
            _ => {}
        }
    }

    Ok(())
}
