//! Frame clock and diagnostic metrics

/// Monotonic frame clock
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    elapsed: f64,
    frames: u64,
    last_delta: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Negative or non-finite deltas count as zero
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += f64::from(dt);
        self.frames += 1;
        self.last_delta = dt;
    }

    /// Seconds since the first tick
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }
}

/// Values the renderer reports for the metrics readout
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameProbe {
    /// Heap in use, if the platform exposes it
    pub heap_bytes: Option<u64>,
    pub draw_calls: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMetrics {
    /// Frame the sample was taken on
    pub frame: u64,
    /// Instantaneous frames per second (1 / dt)
    pub fps: f32,
    pub heap_bytes: Option<u64>,
    pub draw_calls: Option<u32>,
}

impl FrameMetrics {
    pub fn fps_label(&self) -> String {
        format!("{:.0}", self.fps)
    }

    pub fn heap_label(&self) -> String {
        match self.heap_bytes {
            Some(bytes) => format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0)),
            None => "unavailable".to_string(),
        }
    }

    pub fn draw_calls_label(&self) -> String {
        match self.draw_calls {
            Some(calls) => calls.to_string(),
            None => "unavailable".to_string(),
        }
    }
}

/// Recomputes [`FrameMetrics`] every `interval` frames
#[derive(Debug, Clone)]
pub struct MetricsSampler {
    interval: u32,
    latest: Option<FrameMetrics>,
}

impl MetricsSampler {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            latest: None,
        }
    }

    pub fn latest(&self) -> Option<&FrameMetrics> {
        self.latest.as_ref()
    }

    /// Returns true when a new sample was taken this frame
    pub fn sample(&mut self, clock: &FrameClock, probe: &FrameProbe) -> bool {
        if clock.frames() == 0 || clock.frames() % u64::from(self.interval) != 0 {
            return false;
        }

        let dt = clock.last_delta();
        let fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };
        self.latest = Some(FrameMetrics {
            frame: clock.frames(),
            fps,
            heap_bytes: probe.heap_bytes,
            draw_calls: probe.draw_calls,
        });
        true
    }
}

/// Frame-rate independent smoothing: the per-frame `damping` factor at
/// 60 fps, scaled to `dt`
pub fn damping_factor(damping: f32, dt: f32) -> f32 {
    1.0 - (-damping * 60.0 * dt).exp()
}
