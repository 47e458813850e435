use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        mpsc, Arc, Mutex,
    },
    thread,
};

use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    FromSample, SampleFormat, SizedSample,
};
use rtrb::{Consumer, Producer, RingBuffer};

use crate::{
    error::OutputError,
    graph::{end_time, GraphNode, RenderCtx},
    synth::{mixer::GraphMixer, Destination},
    MAX_BLOCK_SIZE,
};

type Graph = Box<dyn GraphNode>;

/// Sizing for the live output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Graphs that can wait for the audio callback at once.
    pub queue_capacity: usize,
    /// Graphs the callback plays at once. Further graphs wait in the queue.
    pub max_active_graphs: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 64,
            max_active_graphs: 32,
        }
    }
}

/*
Handoff
=======

Two rings connect callers to the audio callback:

    caller ──queue──▶ callback      new graphs
    caller ◀─retired── callback     graphs that finished playing

The callback never frees a graph. Finished graphs go back over `retired`
and are dropped by the next caller to schedule something. The callback
also never grows its active list: once `max_active_graphs` are playing,
new graphs stay in the queue until a slot frees up.

`retired` is sized for every graph that can be in flight (queued plus
playing), so the callback only drops a graph itself if callers stop
scheduling for long enough that it is full.


Lookahead
---------

The callback empties the queue at the start of each block and advances the
frame clock at its end. A graph scheduled against the raw clock in between
would start one block in the past and lose up to `MAX_BLOCK_SIZE` frames of
its onset. New graphs are laid out one full block ahead of the clock:

    clock           S
    block rendering [S ............ S+F)      F <= MAX_BLOCK_SIZE
    current_time    S + MAX_BLOCK_SIZE        >= start of next block
*/

/// Caller side of both rings.
struct Handoff {
    queue: Producer<Graph>,
    retired: Consumer<Graph>,
}

/// Build both rings. Returns the caller side plus the callback's ends.
fn handoff(config: OutputConfig) -> (Handoff, Consumer<Graph>, Producer<Graph>) {
    let (queue_tx, queue_rx) = RingBuffer::new(config.queue_capacity.max(1));
    let (retired_tx, retired_rx) =
        RingBuffer::new((config.queue_capacity + config.max_active_graphs).max(1));
    let handoff = Handoff {
        queue: queue_tx,
        retired: retired_rx,
    };
    (handoff, queue_rx, retired_tx)
}

/// Hand `graph` to the callback. Returns false if the queue was full and the
/// graph was dropped.
fn enqueue(handoff: &Mutex<Handoff>, graph: Graph) -> bool {
    if end_time(graph.as_ref()).is_none() {
        tracing::warn!("graph has a source without a stop time; it will never be released");
    }

    // A panic elsewhere while holding the lock leaves both rings intact
    let mut handoff = handoff.lock().unwrap_or_else(|e| e.into_inner());
    while let Ok(finished) = handoff.retired.pop() {
        drop(finished);
    }

    if handoff.queue.push(graph).is_err() {
        tracing::warn!("output queue full; tone dropped");
        return false;
    }
    true
}

/// Start time for a graph scheduled while the clock reads `frames`.
fn schedule_time(frames: u64, sample_rate: f32) -> f64 {
    (frames + MAX_BLOCK_SIZE as u64) as f64 / sample_rate as f64
}

/// The live audio destination.
///
/// The cpal stream lives on its own `tone-output` thread for the rest of the
/// process. Graphs cross to the audio callback through a lock-free ring; the
/// callback plays them and sends them back once they finish.
pub struct OutputContext {
    sample_rate: f32,
    frames: Arc<AtomicU64>,
    handoff: Mutex<Handoff>,
}

impl OutputContext {
    /// Open the default output device and start streaming silence.
    pub fn open(config: OutputConfig) -> Result<Self, OutputError> {
        let (handoff, queue, retired) = handoff(config);
        let frames = Arc::new(AtomicU64::new(0));
        let (ready_tx, ready_rx) = mpsc::sync_channel(1);

        let clock = Arc::clone(&frames);
        thread::Builder::new()
            .name("tone-output".into())
            .spawn(move || {
                let mixer = GraphMixer::with_capacity(config.max_active_graphs);
                match start_stream(queue, retired, mixer, clock) {
                    Ok((stream, sample_rate)) => {
                        let _ = ready_tx.send(Ok(sample_rate));
                        // The stream stops when dropped
                        let _stream = stream;
                        loop {
                            thread::park();
                        }
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                    }
                }
            })
            .map_err(OutputError::Thread)?;

        let sample_rate = ready_rx.recv().map_err(|_| OutputError::ThreadExited)??;

        Ok(Self {
            sample_rate,
            frames,
            handoff: Mutex::new(handoff),
        })
    }
}

impl Destination for OutputContext {
    fn current_time(&self) -> f64 {
        schedule_time(self.frames.load(Ordering::Acquire), self.sample_rate)
    }

    fn schedule(&self, graph: Box<dyn GraphNode>) {
        enqueue(&self.handoff, graph);
    }
}

fn start_stream(
    queue: Consumer<Graph>,
    retired: Producer<Graph>,
    mixer: GraphMixer,
    clock: Arc<AtomicU64>,
) -> Result<(cpal::Stream, f32), OutputError> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(OutputError::NoDevice)?;
    let supported = device.default_output_config()?;

    let sample_format = supported.sample_format();
    let config: cpal::StreamConfig = supported.into();
    let sample_rate = config.sample_rate.0 as f32;

    let callback = OutputCallback {
        queue,
        retired,
        mixer,
        clock,
        sample_rate,
        block: vec![0.0; MAX_BLOCK_SIZE],
    };

    let stream = match sample_format {
        SampleFormat::F32 => build_stream::<f32>(&device, &config, callback)?,
        SampleFormat::I16 => build_stream::<i16>(&device, &config, callback)?,
        SampleFormat::U16 => build_stream::<u16>(&device, &config, callback)?,
        other => return Err(OutputError::UnsupportedFormat(other)),
    };
    stream.play()?;

    tracing::info!(
        sample_rate,
        channels = config.channels,
        format = ?sample_format,
        "audio output opened"
    );

    Ok((stream, sample_rate))
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mut callback: OutputCallback,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| callback.fill(data, channels),
        |err| tracing::warn!(error = %err, "audio stream error"),
        None,
    )
}

/// State owned by the audio callback.
struct OutputCallback {
    queue: Consumer<Graph>,
    retired: Producer<Graph>,
    mixer: GraphMixer,
    clock: Arc<AtomicU64>,
    sample_rate: f32,
    block: Vec<f32>,
}

impl OutputCallback {
    fn fill<T>(&mut self, data: &mut [T], channels: usize)
    where
        T: SizedSample + FromSample<f32>,
    {
        let channels = channels.max(1);

        for chunk in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
            while !self.mixer.is_full() {
                match self.queue.pop() {
                    Ok(graph) => self.mixer.add(graph),
                    Err(_) => break,
                }
            }

            let frames = chunk.len() / channels;
            let start = self.clock.load(Ordering::Acquire);
            let ctx = RenderCtx::new(self.sample_rate, start as f64 / self.sample_rate as f64);

            let block = &mut self.block[..frames];
            let retired = &mut self.retired;
            self.mixer.render_block_with(block, &ctx, |graph| {
                // Full only if nobody has scheduled for a long while
                let _ = retired.push(graph);
            });

            // Mono to every channel
            for (frame, &sample) in chunk.chunks_mut(channels).zip(block.iter()) {
                frame.fill(T::from_sample(sample));
            }

            self.clock.store(start + frames as u64, Ordering::Release);
        }
    }
}
