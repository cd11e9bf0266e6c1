#![forbid(unsafe_code)]

//! Elm-style runtime for the folio terminal app.
//!
//! The program owns a [`Model`], feeds it [`Event`]s, and renders a fresh
//! [`Frame`] whenever an update marks the UI dirty. Every frame is presented
//! in full; the pages are small enough that diffing buys nothing.
//!
//! Input and output are split so tests can drive a program with synthetic
//! events and a `Vec<u8>` writer, without a real terminal.

use std::io::{self, Write};

use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, queue, terminal};
use web_time::{Duration, Instant};

use crate::event::Event;
use crate::frame::{Frame, Style};
use crate::terminal_session::TerminalSession;

/// Application state and behavior.
pub trait Model {
    /// Messages the model reacts to. Terminal events convert into them.
    type Message: From<Event>;

    /// Called once before the first frame.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// State transition.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state.
    fn view(&self, frame: &mut Frame);
}

/// Side effects requested by `init` and `update`.
#[derive(Debug)]
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Stop the program after the current event.
    Quit,
    /// Execute several commands in order.
    Batch(Vec<Cmd<M>>),
    /// Feed a message straight back into `update`.
    Msg(M),
    /// Deliver [`Event::Tick`] every `Duration` from now on.
    Tick(Duration),
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    #[inline]
    pub fn tick(duration: Duration) -> Self {
        Self::Tick(duration)
    }

    /// Combine commands; empty and single-element batches collapse.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds = cmds;
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

/// The runtime that drives a [`Model`].
pub struct Program<M: Model, W: Write> {
    model: M,
    writer: W,
    width: u16,
    height: u16,
    running: bool,
    dirty: bool,
    tick_rate: Option<Duration>,
    last_tick: Instant,
    frames: u64,
}

impl<M: Model, W: Write> Program<M, W> {
    pub fn new(model: M, writer: W, width: u16, height: u16) -> Self {
        Self {
            model,
            writer,
            width,
            height,
            running: true,
            dirty: true,
            tick_rate: None,
            last_tick: Instant::now(),
            frames: 0,
        }
    }

    /// Run `init` and present the first frame.
    pub fn init(&mut self) -> io::Result<()> {
        let cmd = self.model.init();
        self.execute_cmd(cmd);
        self.render_if_dirty()
    }

    /// Feed one event through `update`.
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Resize { width, height } = event {
            self.width = width;
            self.height = height;
        }
        let cmd = self.model.update(M::Message::from(event));
        self.dirty = true;
        self.execute_cmd(cmd);
    }

    /// Deliver a tick if one is due at `now`.
    pub fn tick_if_due(&mut self, now: Instant) {
        let Some(rate) = self.tick_rate else { return };
        if now.duration_since(self.last_tick) >= rate {
            self.last_tick = now;
            self.handle_event(Event::Tick);
        }
    }

    /// Present a frame if the last update changed anything.
    pub fn render_if_dirty(&mut self) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let mut frame = Frame::new(self.width, self.height);
        self.model.view(&mut frame);
        present(&frame, &mut self.writer)?;
        self.dirty = false;
        self.frames += 1;
        Ok(())
    }

    /// Main loop against a live terminal session.
    pub fn run(&mut self, session: &TerminalSession) -> io::Result<()> {
        let _span = tracing::debug_span!("program_run", width = self.width, height = self.height)
            .entered();
        self.init()?;

        while self.running {
            let timeout = self.effective_timeout();
            if let Some(event) = session.poll_event(timeout)? {
                self.handle_event(event);
            }
            self.tick_if_due(Instant::now());
            self.render_if_dirty()?;
        }

        tracing::debug!(frames = self.frames, "program loop finished");
        Ok(())
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    #[must_use]
    pub fn tick_rate(&self) -> Option<Duration> {
        self.tick_rate
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(m) => {
                let cmd = self.model.update(m);
                self.dirty = true;
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Tick(duration) => {
                self.tick_rate = Some(duration);
                self.last_tick = Instant::now();
            }
        }
    }

    fn effective_timeout(&self) -> Duration {
        match self.tick_rate {
            Some(rate) => rate.saturating_sub(self.last_tick.elapsed()),
            None => Duration::from_millis(100),
        }
    }
}

/// Write a whole frame to `out`.
pub fn present<W: Write>(frame: &Frame, out: &mut W) -> io::Result<()> {
    queue!(out, cursor::Hide, terminal::Clear(terminal::ClearType::All))?;

    for y in 0..frame.height() {
        queue!(out, cursor::MoveTo(0, y))?;
        let mut current: Option<Style> = None;
        for cell in frame.row(y).iter().filter(|cell| !cell.continuation) {
            if current != Some(cell.style) {
                apply_style(out, cell.style)?;
                current = Some(cell.style);
            }
            queue!(out, Print(cell.ch))?;
        }
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    }

    if let Some((x, y)) = frame.cursor() {
        queue!(out, cursor::MoveTo(x, y), cursor::Show)?;
    }
    out.flush()
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(fg))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(bg))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyCode, KeyEvent};

    struct Counter {
        count: i32,
        ticks: u32,
    }

    enum Msg {
        Increment,
        Quit,
        Tick,
        Ignore,
    }

    impl From<Event> for Msg {
        fn from(event: Event) -> Self {
            match event {
                Event::Key(k) if k.is_char('+') => Msg::Increment,
                Event::Key(k) if k.is_char('q') => Msg::Quit,
                Event::Tick => Msg::Tick,
                _ => Msg::Ignore,
            }
        }
    }

    impl Model for Counter {
        type Message = Msg;

        fn init(&mut self) -> Cmd<Msg> {
            Cmd::tick(Duration::from_millis(10))
        }

        fn update(&mut self, msg: Msg) -> Cmd<Msg> {
            match msg {
                Msg::Increment => {
                    self.count += 1;
                    Cmd::none()
                }
                Msg::Quit => Cmd::quit(),
                Msg::Tick => {
                    self.ticks += 1;
                    Cmd::none()
                }
                Msg::Ignore => Cmd::none(),
            }
        }

        fn view(&self, frame: &mut Frame) {
            let text = format!("count={}", self.count);
            let area = frame.area();
            let end = frame.print_in(area, &text, Style::new());
            frame.set_cursor(Some((end, 0)));
        }
    }

    fn program() -> Program<Counter, Vec<u8>> {
        Program::new(Counter { count: 0, ticks: 0 }, Vec::new(), 20, 2)
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c)))
    }

    #[test]
    fn init_schedules_tick_and_renders() {
        let mut program = program();
        program.init().unwrap();
        assert_eq!(program.tick_rate(), Some(Duration::from_millis(10)));
        assert_eq!(program.frames(), 1);
        let output = String::from_utf8_lossy(program.writer_mut()).to_string();
        assert!(output.contains("count=0"));
    }

    #[test]
    fn events_update_model_and_mark_dirty() {
        let mut program = program();
        program.init().unwrap();
        program.handle_event(key('+'));
        program.handle_event(key('+'));
        program.render_if_dirty().unwrap();
        assert_eq!(program.model().count, 2);
        assert_eq!(program.frames(), 2);
        program.render_if_dirty().unwrap();
        assert_eq!(program.frames(), 2);
    }

    #[test]
    fn present_shows_cursor_only_when_placed() {
        let mut frame = Frame::new(10, 2);
        frame.print(0, 0, "hi", Style::new(), 10);
        let mut out = Vec::new();
        present(&frame, &mut out).unwrap();
        let hidden = String::from_utf8_lossy(&out).to_string();
        assert!(hidden.starts_with("\x1b[?25l"), "{hidden:?}");
        assert!(!hidden.contains("\x1b[?25h"), "{hidden:?}");

        frame.set_cursor(Some((2, 1)));
        let mut out = Vec::new();
        present(&frame, &mut out).unwrap();
        let shown = String::from_utf8_lossy(&out).to_string();
        assert!(shown.ends_with("\x1b[2;3H\x1b[?25h"), "{shown:?}");
    }

    #[test]
    fn view_cursor_reaches_output() {
        let mut program = program();
        program.init().unwrap();
        let output = String::from_utf8_lossy(program.writer_mut()).to_string();
        assert!(output.ends_with("\x1b[1;8H\x1b[?25h"), "{output:?}");
    }

    #[test]
    fn quit_stops_running() {
        let mut program = program();
        program.handle_event(key('q'));
        assert!(!program.is_running());
    }

    #[test]
    fn tick_fires_only_when_due() {
        let mut program = program();
        program.init().unwrap();
        let start = Instant::now();
        program.tick_if_due(start);
        let early = program.model().ticks;
        program.tick_if_due(start + Duration::from_millis(50));
        assert_eq!(program.model().ticks, early + 1);
    }

    #[test]
    fn resize_changes_frame_size() {
        let mut program = program();
        program.handle_event(Event::Resize {
            width: 40,
            height: 5,
        });
        program.render_if_dirty().unwrap();
        assert_eq!((program.width, program.height), (40, 5));
    }

    #[test]
    fn batch_collapses() {
        assert!(matches!(Cmd::<Msg>::batch(vec![]), Cmd::None));
        assert!(matches!(Cmd::<Msg>::batch(vec![Cmd::Quit]), Cmd::Quit));
        assert!(matches!(
            Cmd::<Msg>::batch(vec![Cmd::Quit, Cmd::None]),
            Cmd::Batch(_)
        ));
    }
}
