use super::*;

use std::io;
use std::sync::{Arc, Mutex as StdMutex};

use crate::encoder::CommandEncoder;
use crate::transport::Transport;

struct RecordingTransport {
    written: Arc<StdMutex<Vec<i8>>>,
}

impl Transport for RecordingTransport {
    fn write_byte(&mut self, value: i8) -> io::Result<()> {
        self.written.lock().unwrap().push(value);
        Ok(())
    }
}

fn recording_encoder() -> (CommandEncoder, Arc<StdMutex<Vec<i8>>>) {
    let written = Arc::new(StdMutex::new(Vec::new()));
    let transport = RecordingTransport {
        written: Arc::clone(&written),
    };
    (CommandEncoder::new(Box::new(transport)), written)
}

fn drain(written: &Arc<StdMutex<Vec<i8>>>) -> Vec<i8> {
    std::mem::take(&mut *written.lock().unwrap())
}

const TICK: Duration = Duration::from_secs(1);

#[tokio::test(start_paused = true)]
async fn wrist_turn_is_a_single_pulse() {
    let (encoder, written) = recording_encoder();
    let mut wrist = WristTurn;

    wrist.start(&encoder).await.unwrap();
    assert_eq!(drain(&written), vec![3]);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(drain(&written).is_empty());

    wrist.stop(&encoder).await.unwrap();
    assert!(drain(&written).is_empty());
}

#[tokio::test(start_paused = true)]
async fn gesture_cycle_emits_three_moves_then_self_stops() {
    let (encoder, written) = recording_encoder();
    let mut cycle = GestureCycle::new(TICK);

    cycle.start(&encoder).await.unwrap();
    assert_eq!(drain(&written), vec![0]);

    tokio::time::sleep(Duration::from_millis(3500)).await;
    assert_eq!(drain(&written), vec![1, 2]);

    // The task exited on its own after the last step.
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(drain(&written).is_empty());

    // Stopping after the self-stop is still safe.
    cycle.stop(&encoder).await.unwrap();
    assert!(drain(&written).is_empty());
}

#[tokio::test(start_paused = true)]
async fn gesture_cycle_stop_cancels_mid_sequence() {
    let (encoder, written) = recording_encoder();
    let mut cycle = GestureCycle::new(TICK);

    cycle.start(&encoder).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(drain(&written), vec![0, 1]);

    cycle.stop(&encoder).await.unwrap();
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(drain(&written).is_empty());
}

#[tokio::test(start_paused = true)]
async fn finger_wave_wraps_at_the_pinky_and_stops_with_neutral() {
    let (encoder, written) = recording_encoder();
    let mut wave = FingerWave::new(TICK);

    wave.start(&encoder).await.unwrap();
    assert_eq!(drain(&written), vec![1]);

    // Five ticks: one full pass over the hand, the last pair wrapping from
    // the pinky (13) back to the thumb (4).
    tokio::time::sleep(Duration::from_millis(5500)).await;
    assert_eq!(drain(&written), vec![5, 6, 7, 8, 9, 10, 11, 12, 13, 4]);

    wave.stop(&encoder).await.unwrap();
    assert_eq!(drain(&written), vec![1]);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert!(drain(&written).is_empty());
}

#[tokio::test(start_paused = true)]
async fn finger_wave_stop_is_idempotent() {
    let (encoder, written) = recording_encoder();
    let mut wave = FingerWave::new(TICK);

    // Never started: nothing to cancel, nothing emitted.
    wave.stop(&encoder).await.unwrap();
    assert!(drain(&written).is_empty());

    wave.start(&encoder).await.unwrap();
    wave.stop(&encoder).await.unwrap();
    drain(&written);

    wave.stop(&encoder).await.unwrap();
    assert!(drain(&written).is_empty());
}
