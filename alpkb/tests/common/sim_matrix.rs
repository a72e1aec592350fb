//! An electrical model of a key grid, wired to pins implementing `FlexPin`.
//!
//! Lines idle high through their pull-ups. A line reads low when it's driven
//! low itself, or when a pressed key connects it to a line driven low and the
//! key's diode lets current through in that direction.

use std::cell::RefCell;
use std::rc::Rc;

use alpkb::driver::flex_pin::FlexPin;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

/// Diode orientation of a key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wiring {
    /// Seen when the row is driven
    Col2Row,
    /// Seen when the column is driven
    Row2Col,
    /// No diode, seen from both sides
    Direct,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
}

#[derive(Default)]
struct GridState {
    rows_low: Vec<bool>,
    cols_low: Vec<bool>,
    keys: Vec<(usize, usize, Wiring)>,
    broken: Vec<Line>,
    /// Every line driven low, in order
    selections: Vec<Line>,
}

impl GridState {
    fn driven_low(&self, line: Line) -> bool {
        match line {
            Line::Row(r) => self.rows_low[r],
            Line::Col(c) => self.cols_low[c],
        }
    }

    fn set_driven_low(&mut self, line: Line, low: bool) {
        if low && !self.driven_low(line) {
            self.selections.push(line);
        }
        match line {
            Line::Row(r) => self.rows_low[r] = low,
            Line::Col(c) => self.cols_low[c] = low,
        }
    }

    fn reads_low(&self, line: Line) -> bool {
        if self.driven_low(line) {
            return true;
        }
        self.keys.iter().any(|&(r, c, wiring)| match line {
            Line::Col(col) => col == c && self.rows_low[r] && wiring != Wiring::Row2Col,
            Line::Row(row) => row == r && self.cols_low[c] && wiring != Wiring::Col2Row,
        })
    }
}

/// A simulated key grid
#[derive(Clone)]
pub struct SimGrid {
    state: Rc<RefCell<GridState>>,
}

impl SimGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            state: Rc::new(RefCell::new(GridState {
                rows_low: vec![false; rows],
                cols_low: vec![false; cols],
                ..Default::default()
            })),
        }
    }

    pub fn row_pins<const R: usize>(&self) -> [SimPin; R] {
        core::array::from_fn(|r| self.pin(Line::Row(r)))
    }

    pub fn col_pins<const C: usize>(&self) -> [SimPin; C] {
        core::array::from_fn(|c| self.pin(Line::Col(c)))
    }

    fn pin(&self, line: Line) -> SimPin {
        SimPin {
            grid: self.clone(),
            line,
            output: false,
        }
    }

    pub fn press(&self, row: usize, col: usize, wiring: Wiring) {
        self.state.borrow_mut().keys.push((row, col, wiring));
    }

    pub fn release(&self, row: usize, col: usize) {
        self.state.borrow_mut().keys.retain(|&(r, c, _)| (r, c) != (row, col));
    }

    /// Make every read of the line fail
    pub fn break_line(&self, line: Line) {
        self.state.borrow_mut().broken.push(line);
    }

    /// Whether no line is driven low
    pub fn is_idle(&self) -> bool {
        let state = self.state.borrow();
        !state.rows_low.iter().chain(state.cols_low.iter()).any(|low| *low)
    }

    /// Lines driven low since the last call
    pub fn take_selections(&self) -> Vec<Line> {
        core::mem::take(&mut self.state.borrow_mut().selections)
    }
}

pub struct SimPin {
    grid: SimGrid,
    line: Line,
    output: bool,
}

impl ErrorType for SimPin {
    type Error = ErrorKind;
}

impl InputPin for SimPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        let state = self.grid.state.borrow();
        if state.broken.contains(&self.line) {
            return Err(ErrorKind::Other);
        }
        Ok(state.reads_low(self.line))
    }
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.output {
            self.grid.state.borrow_mut().set_driven_low(self.line, true);
        }
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.grid.state.borrow_mut().set_driven_low(self.line, false);
        Ok(())
    }
}

impl FlexPin for SimPin {
    fn set_as_input(&mut self) {
        self.output = false;
        self.grid.state.borrow_mut().set_driven_low(self.line, false);
    }

    fn set_as_output(&mut self) {
        self.output = true;
    }
}

/// Delay which only counts its calls
#[derive(Clone, Default)]
pub struct CountingDelay {
    ns: Rc<RefCell<Vec<u32>>>,
    us: Rc<RefCell<Vec<u32>>>,
}

impl CountingDelay {
    pub fn ns_calls(&self) -> Vec<u32> {
        self.ns.borrow().clone()
    }

    pub fn us_calls(&self) -> Vec<u32> {
        self.us.borrow().clone()
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns.borrow_mut().push(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.us.borrow_mut().push(us);
    }
}
