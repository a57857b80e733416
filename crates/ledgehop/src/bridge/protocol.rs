//! Shared frame buffer layout.
//! Must stay in sync with TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Rects:  max_records × 8 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written into the header on every frame.
//! TypeScript reads them from the header to compute offsets dynamically.

use crate::api::types::{EventRecord, GameEvent};
use crate::components::platform::PlatformKind;
use crate::config::GameConfig;
use crate::renderer::instance::{RecordKind, RectRecord};
use crate::renderer::snapshot::FrameSnapshot;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_STATE: usize = 2;
pub const HEADER_MAX_RECORDS: usize = 3;
pub const HEADER_RECORD_COUNT: usize = 4;
pub const HEADER_MAX_EVENTS: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
pub const HEADER_CAMERA_OFFSET: usize = 7;
pub const HEADER_LEVEL_WIDTH: usize = 8;
pub const HEADER_VIEWPORT_WIDTH: usize = 9;
pub const HEADER_VIEWPORT_HEIGHT: usize = 10;
pub const HEADER_HEALTH: usize = 11;
pub const HEADER_MAX_HEALTH: usize = 12;
pub const HEADER_COINS_COLLECTED: usize = 13;
pub const HEADER_COINS_TOTAL: usize = 14;
pub const HEADER_INVINCIBLE: usize = 15;

/// The frame counter wraps here so every value stays exact in an `f32`.
pub const FRAME_COUNTER_WRAP: u64 = 1 << 24;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per rectangle record (wire format, never changes).
pub const RECORD_FLOATS: usize = RectRecord::FLOATS;

/// Floats per game event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = EventRecord::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum rectangle records per frame.
    pub max_records: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Size of record data section in floats.
    pub record_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where record data begins.
    pub record_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_records: usize, max_events: usize) -> Self {
        let record_data_floats = max_records * RECORD_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let record_data_offset = HEADER_FLOATS;
        let event_data_offset = record_data_offset + record_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_records,
            max_events,
            record_data_floats,
            event_data_floats,
            record_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_records, config.max_events)
    }
}

/// Flat `f32` buffer the host reads once per frame.
///
/// Records are written player first, then enemies, coins, the goal, and platforms, so
/// truncation drops static scenery before anything the player interacts with.
pub struct FrameBuffer {
    layout: ProtocolLayout,
    viewport: [f32; 2],
    data: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(layout: ProtocolLayout, viewport_width: f32, viewport_height: f32) -> Self {
        let data = vec![0.0; layout.buffer_total_floats];
        Self {
            layout,
            viewport: [viewport_width, viewport_height],
            data,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(ProtocolLayout::from_config(config), config.viewport_width, config.viewport_height)
    }

    /// Pack one frame. Records or events beyond capacity are dropped with a warning;
    /// the header counts reflect what was actually written.
    pub fn write(&mut self, snapshot: &FrameSnapshot, events: &[GameEvent]) {
        let layout = &self.layout;

        let player = &snapshot.player;
        let records = std::iter::once(
            RectRecord::new(RecordKind::Player, &player.rect)
                .with_facing(player.facing)
                .with_flash(player.invincible > 0),
        )
        .chain(
            snapshot
                .enemies
                .iter()
                .map(|e| RectRecord::new(RecordKind::Enemy, &e.rect).with_facing(e.facing)),
        )
        .chain(snapshot.coins.iter().map(|c| RectRecord::new(RecordKind::Coin, c)))
        .chain(std::iter::once(RectRecord::new(RecordKind::Goal, &snapshot.goal)))
        .chain(snapshot.platforms.iter().map(|p| {
            let kind = match p.kind {
                PlatformKind::Solid => RecordKind::Solid,
                PlatformKind::Breakable => RecordKind::Breakable,
            };
            RectRecord::new(kind, &p.rect)
        }));

        let wanted = snapshot.rect_count();
        if wanted > layout.max_records {
            log::warn!(
                "frame {}: {} rects exceed capacity {}, truncating",
                snapshot.frame,
                wanted,
                layout.max_records
            );
        }
        let mut record_count = 0;
        for (i, rec) in records.take(layout.max_records).enumerate() {
            let start = layout.record_data_offset + i * RECORD_FLOATS;
            self.data[start..start + RECORD_FLOATS].copy_from_slice(&rec.as_floats());
            record_count += 1;
        }

        if events.len() > layout.max_events {
            log::warn!(
                "frame {}: {} events exceed capacity {}, truncating",
                snapshot.frame,
                events.len(),
                layout.max_events
            );
        }
        let event_count = events.len().min(layout.max_events);
        for (i, event) in events[..event_count].iter().enumerate() {
            let start = layout.event_data_offset + i * EVENT_FLOATS;
            let rec = event.to_record();
            self.data[start..start + EVENT_FLOATS].copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(&rec)));
        }

        let header = &mut self.data[..HEADER_FLOATS];
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_FRAME_COUNTER] = (snapshot.frame % FRAME_COUNTER_WRAP) as f32;
        header[HEADER_STATE] = snapshot.state.as_u8() as f32;
        header[HEADER_MAX_RECORDS] = layout.max_records as f32;
        header[HEADER_RECORD_COUNT] = record_count as f32;
        header[HEADER_MAX_EVENTS] = layout.max_events as f32;
        header[HEADER_EVENT_COUNT] = event_count as f32;
        header[HEADER_CAMERA_OFFSET] = snapshot.camera_offset;
        header[HEADER_LEVEL_WIDTH] = snapshot.level_width;
        header[HEADER_VIEWPORT_WIDTH] = self.viewport[0];
        header[HEADER_VIEWPORT_HEIGHT] = self.viewport[1];
        header[HEADER_HEALTH] = player.health as f32;
        header[HEADER_MAX_HEALTH] = player.max_health as f32;
        header[HEADER_COINS_COLLECTED] = snapshot.coins_collected as f32;
        header[HEADER_COINS_TOTAL] = snapshot.coins_total as f32;
        header[HEADER_INVINCIBLE] = player.invincible as f32;
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Raw pointer for SharedArrayBuffer / wasm memory reads.
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn header(&self, index: usize) -> f32 {
        self.data[index]
    }

    /// Records written by the last [`FrameBuffer::write`].
    pub fn records(&self) -> &[RectRecord] {
        let count = self.data[HEADER_RECORD_COUNT] as usize;
        let start = self.layout.record_data_offset;
        bytemuck::cast_slice(&self.data[start..start + count * RECORD_FLOATS])
    }

    /// Events written by the last [`FrameBuffer::write`].
    pub fn events(&self) -> &[EventRecord] {
        let count = self.data[HEADER_EVENT_COUNT] as usize;
        let start = self.layout.event_data_offset;
        bytemuck::cast_slice(&self.data[start..start + count * EVENT_FLOATS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::GameOverCause;
    use crate::game::{GameState, World};
    use crate::level::TileGrid;

    fn snapshot(rows: &[&str]) -> FrameSnapshot {
        let grid = TileGrid::from_rows(rows).unwrap();
        let world = World::new(&grid, &GameConfig::default()).unwrap();
        FrameSnapshot::capture(GameState::Playing, &world)
    }

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());

        assert_eq!(layout.max_records, 1024);
        assert_eq!(layout.max_events, 32);
        assert_eq!(layout.record_data_floats, 1024 * 8);
        assert_eq!(layout.event_data_floats, 32 * 4);
        assert_eq!(layout.record_data_offset, 16);
        assert_eq!(layout.event_data_offset, 16 + 1024 * 8);
        assert_eq!(layout.buffer_total_floats, 16 + 1024 * 8 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20);

        assert_eq!(layout.record_data_offset, HEADER_FLOATS);
        assert_eq!(layout.event_data_offset, layout.record_data_offset + layout.record_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + layout.event_data_floats);
    }

    #[test]
    fn writes_header_records_and_events() {
        let snap = snapshot(&["C..EG", "..B..", "#####"]);
        let mut buf = FrameBuffer::from_config(&GameConfig::default());
        buf.write(&snap, &[GameEvent::CoinCollected { total: 1 }]);

        assert_eq!(buf.header(HEADER_PROTOCOL_VERSION), PROTOCOL_VERSION);
        assert_eq!(buf.header(HEADER_STATE), 1.0);
        assert_eq!(buf.header(HEADER_RECORD_COUNT), 10.0);
        assert_eq!(buf.header(HEADER_EVENT_COUNT), 1.0);
        assert_eq!(buf.header(HEADER_LEVEL_WIDTH), 250.0);
        assert_eq!(buf.header(HEADER_VIEWPORT_HEIGHT), 540.0);
        assert_eq!(buf.header(HEADER_HEALTH), 3.0);
        assert_eq!(buf.header(HEADER_COINS_TOTAL), 1.0);

        let records = buf.records();
        assert_eq!(records[0].kind, RecordKind::Player.as_u8() as f32);
        assert_eq!(records[0].facing, 1.0);
        assert_eq!(records[1].kind, RecordKind::Enemy.as_u8() as f32);
        assert_eq!(records[1].facing, -1.0);
        assert_eq!(records[2].kind, RecordKind::Coin.as_u8() as f32);
        assert_eq!(records[3].kind, RecordKind::Goal.as_u8() as f32);
        assert_eq!(records[4].kind, RecordKind::Breakable.as_u8() as f32);
        assert_eq!(records[9].kind, RecordKind::Solid.as_u8() as f32);

        assert_eq!(buf.events(), &[EventRecord { kind: 2.0, a: 1.0, b: 0.0, c: 0.0 }]);
    }

    #[test]
    fn overflow_is_truncated_and_counted() {
        let snap = snapshot(&["C..EG", "..B..", "#####"]);
        let mut buf = FrameBuffer::new(ProtocolLayout::new(3, 1), 960.0, 540.0);
        let events = [
            GameEvent::PlayerHit { health: 0 },
            GameEvent::GameOver { cause: GameOverCause::OutOfHealth },
        ];
        buf.write(&snap, &events);

        assert_eq!(buf.len(), 16 + 3 * 8 + 4);
        assert_eq!(buf.header(HEADER_RECORD_COUNT), 3.0);
        assert_eq!(buf.records().len(), 3);
        assert_eq!(buf.header(HEADER_EVENT_COUNT), 1.0);
        assert_eq!(buf.events()[0].kind, 4.0);
    }

    #[test]
    fn frame_counter_wraps_before_losing_precision() {
        let mut snap = snapshot(&["G", "#"]);
        let mut buf = FrameBuffer::from_config(&GameConfig::default());

        snap.frame = FRAME_COUNTER_WRAP - 1;
        buf.write(&snap, &[]);
        assert_eq!(buf.header(HEADER_FRAME_COUNTER), 16_777_215.0);

        snap.frame = FRAME_COUNTER_WRAP + 5;
        buf.write(&snap, &[]);
        assert_eq!(buf.header(HEADER_FRAME_COUNTER), 5.0);
    }

    #[test]
    fn counts_shrink_on_later_frames() {
        let mut buf = FrameBuffer::from_config(&GameConfig::default());
        buf.write(&snapshot(&["C..EG", "..B..", "#####"]), &[GameEvent::Started]);
        buf.write(&snapshot(&["G", "#"]), &[]);
        assert_eq!(buf.records().len(), 3);
        assert!(buf.events().is_empty());
    }
}
