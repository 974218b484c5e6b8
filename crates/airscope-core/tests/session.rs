use std::collections::VecDeque;
use std::io;

use airscope_core::{
    ACTIVATION_COMMAND, Display, FRAME_MARKER, Input, Layout, READ_FAILURE_MESSAGE, REPORT_LEN,
    ReportSource, SessionEnd, SourceError, Viewport, activate, run_session,
};

const RATE_ROLL_OFFSET: usize = 22;

enum Step {
    Frame(Vec<u8>),
    Fail,
}

#[derive(Default)]
struct ScriptedSource {
    steps: VecDeque<Step>,
    sent: Vec<Vec<u8>>,
    reject_writes: bool,
}

impl ScriptedSource {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            ..Self::default()
        }
    }
}

impl ReportSource for ScriptedSource {
    fn send(&mut self, bytes: &[u8]) -> Result<usize, SourceError> {
        if self.reject_writes {
            return Err(SourceError::Write("rejected".to_string()));
        }
        self.sent.push(bytes.to_vec());
        Ok(bytes.len())
    }

    fn read_report(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        match self.steps.pop_front() {
            Some(Step::Frame(bytes)) => {
                let len = bytes.len().min(buf.len());
                buf[..len].copy_from_slice(&bytes[..len]);
                Ok(len)
            }
            Some(Step::Fail) => Err(SourceError::Read("device unplugged".to_string())),
            None => Ok(0),
        }
    }
}

#[derive(Default)]
struct RecordingDisplay {
    frames: Vec<Layout>,
    polls: VecDeque<Input>,
    waits: VecDeque<Input>,
    wait_count: usize,
}

impl Display for RecordingDisplay {
    fn viewport(&mut self) -> io::Result<Viewport> {
        Ok(Viewport::new(24, 80))
    }

    fn present(&mut self, layout: &Layout) -> io::Result<()> {
        self.frames.push(layout.clone());
        Ok(())
    }

    fn poll_input(&mut self) -> io::Result<Input> {
        Ok(self.polls.pop_front().unwrap_or(Input::Continue))
    }

    fn wait_input(&mut self) -> io::Result<Input> {
        self.wait_count += 1;
        Ok(self.waits.pop_front().unwrap_or(Input::Continue))
    }
}

fn imu_frame(roll: [u8; 2]) -> Vec<u8> {
    let mut frame = vec![0u8; REPORT_LEN];
    frame[..2].copy_from_slice(&FRAME_MARKER.to_le_bytes());
    frame[RATE_ROLL_OFFSET..RATE_ROLL_OFFSET + 2].copy_from_slice(&roll);
    frame
}

fn texts(layout: &Layout) -> Vec<String> {
    layout.lines.iter().map(|line| line.text.clone()).collect()
}

#[test]
fn recognized_frame_shows_decoded_roll_rate() {
    let mut source = ScriptedSource::new(vec![Step::Frame(imu_frame([0x34, 0x12]))]);
    let mut display = RecordingDisplay::default();

    let summary = run_session(&mut source, &mut display).unwrap();

    assert_eq!(summary.recognized, 1);
    assert_eq!(summary.unrecognized, 0);
    assert_eq!(summary.end, SessionEnd::EndOfStream);
    assert_eq!(display.frames.len(), 1);
    let lines = texts(&display.frames[0]);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Rate: 1234 0000 0000");
}

#[test]
fn foreign_marker_shows_single_hex_row() {
    let frame = vec![0xff, 0xff, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
    let mut source = ScriptedSource::new(vec![Step::Frame(frame)]);
    let mut display = RecordingDisplay::default();

    let summary = run_session(&mut source, &mut display).unwrap();

    assert_eq!(summary.unrecognized, 1);
    assert_eq!(summary.recognized, 0);
    assert_eq!(display.frames.len(), 1);
    let lines = texts(&display.frames[0]);
    assert_eq!(lines, ["ff ff 00 01 02 03 04 05 06"]);
    assert_eq!(lines[0].split(' ').count(), 9);
}

#[test]
fn read_failure_shows_status_and_ends() {
    let mut source = ScriptedSource::new(vec![
        Step::Fail,
        Step::Frame(imu_frame([0x00, 0x00])),
    ]);
    let mut display = RecordingDisplay::default();

    let summary = run_session(&mut source, &mut display).unwrap();

    assert!(matches!(summary.end, SessionEnd::ReadFailed(ref msg) if msg.contains("unplugged")));
    assert_eq!(display.frames.len(), 1);
    let frame = &display.frames[0];
    assert_eq!(frame.lines.len(), 1);
    assert_eq!(frame.lines[0].text, READ_FAILURE_MESSAGE);
    assert_eq!(frame.lines[0].col, (80 - READ_FAILURE_MESSAGE.len() as u16) / 2);
    // The queued frame after the failure is never read.
    assert_eq!(source.steps.len(), 1);
}

#[test]
fn mixed_stream_counts_each_outcome() {
    let mut source = ScriptedSource::new(vec![
        Step::Frame(imu_frame([0x01, 0x00])),
        Step::Frame(vec![0x02, 0x01, 0xaa]),
        Step::Frame(imu_frame([0x02, 0x00])),
        Step::Frame(imu_frame([0x01, 0x02])[..10].to_vec()),
    ]);
    let mut display = RecordingDisplay::default();

    let summary = run_session(&mut source, &mut display).unwrap();

    assert_eq!(summary.recognized, 2);
    assert_eq!(summary.unrecognized, 2);
    assert_eq!(display.frames.len(), 4);
    assert_eq!(texts(&display.frames[1]), ["02 01 aa"]);
    assert_eq!(texts(&display.frames[3]).len(), 1);
    // One hold per raw frame plus the final hold at end of stream.
    assert_eq!(display.wait_count, 3);
}

#[test]
fn quit_between_reads_stops_without_reading() {
    let mut source = ScriptedSource::new(vec![Step::Frame(imu_frame([0x00, 0x00]))]);
    let mut display = RecordingDisplay {
        polls: VecDeque::from([Input::Quit]),
        ..RecordingDisplay::default()
    };

    let summary = run_session(&mut source, &mut display).unwrap();

    assert_eq!(summary.end, SessionEnd::Stopped);
    assert!(display.frames.is_empty());
    assert_eq!(source.steps.len(), 1);
}

#[test]
fn quit_while_holding_raw_frame() {
    let mut source = ScriptedSource::new(vec![
        Step::Frame(vec![0xff; 4]),
        Step::Frame(imu_frame([0x00, 0x00])),
    ]);
    let mut display = RecordingDisplay {
        waits: VecDeque::from([Input::Quit]),
        ..RecordingDisplay::default()
    };

    let summary = run_session(&mut source, &mut display).unwrap();

    assert_eq!(summary.end, SessionEnd::Stopped);
    assert_eq!(summary.unrecognized, 1);
    assert_eq!(display.frames.len(), 1);
}

#[test]
fn activation_sends_vendor_command_once() {
    let mut source = ScriptedSource::default();
    activate(&mut source).unwrap();

    assert_eq!(source.sent, [ACTIVATION_COMMAND.to_vec()]);
    assert_eq!(
        source.sent[0],
        [0xaa, 0xc5, 0xd1, 0x21, 0x42, 0x04, 0x00, 0x19, 0x01]
    );
}

#[test]
fn rejected_activation_is_an_error() {
    let mut source = ScriptedSource {
        reject_writes: true,
        ..ScriptedSource::default()
    };
    let err = activate(&mut source).unwrap_err();
    assert!(matches!(err, SourceError::Write(_)));
}
