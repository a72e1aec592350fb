//! Matrix scanned in both diode directions.
//!
//! Every line of the pcb is a [`FlexPin`]. A full scan runs two passes over
//! the same lines:
//!
//! * row pass: each row is driven low in turn while the columns are sampled,
//!   this sees keys whose diode lets current flow from column to row
//! * column pass: each column is driven low in turn while the rows are
//!   sampled, this sees keys wired the other way round
//!
//! A key without a diode is seen by both passes.

use embedded_hal::delay::DelayNs;

use crate::config::MatrixConfig;
use crate::debounce::DebouncerTrait;
use crate::driver::flex_pin::{AtomicFlexPin, FlexPin};
use crate::matrix::{MAX_COL, MatrixRow, MatrixTrait, RawMatrix, col_bit};
use crate::timer::Tick;

/// Dual-phase matrix reader
pub struct DualPhaseMatrix<
    R: FlexPin,
    C: FlexPin,
    D: DelayNs,
    DB: DebouncerTrait<ROW>,
    const ROW: usize,
    const COL: usize,
> {
    /// Row lines of the pcb matrix
    row_pins: [R; ROW],
    /// Column lines of the pcb matrix
    col_pins: [C; COL],
    /// Settle delay provider
    delay: D,
    /// Debouncer
    debouncer: DB,
    /// Samples of both passes
    raw: RawMatrix<ROW>,
    /// Debounced matrix
    debounced: [MatrixRow; ROW],
    config: MatrixConfig,
}

impl<R: FlexPin, C: FlexPin, D: DelayNs, DB: DebouncerTrait<ROW>, const ROW: usize, const COL: usize>
    DualPhaseMatrix<R, C, D, DB, ROW, COL>
{
    const COL_FITS: () = assert!(COL <= MAX_COL, "a matrix row holds at most 32 columns");

    /// Create a matrix from its row and column lines.
    pub fn new(row_pins: [R; ROW], col_pins: [C; COL], delay: D, debouncer: DB) -> Self {
        Self::with_config(row_pins, col_pins, delay, debouncer, MatrixConfig::default())
    }

    pub fn with_config(row_pins: [R; ROW], col_pins: [C; COL], delay: D, debouncer: DB, config: MatrixConfig) -> Self {
        let () = Self::COL_FITS;
        Self {
            row_pins,
            col_pins,
            delay,
            debouncer,
            raw: RawMatrix::new(),
            debounced: [0; ROW],
            config,
        }
    }

    /// Samples of the last scan
    pub fn raw_matrix(&self) -> &RawMatrix<ROW> {
        &self.raw
    }

    fn release_all(&mut self) {
        self.row_pins.iter_mut().for_each(|pin| pin.float_high());
        self.col_pins.iter_mut().for_each(|pin| pin.float_high());
    }

    /// Row pass, returns whether any row differs from the previous row pass.
    pub fn scan_rows(&mut self) -> bool {
        self.release_all();
        let mut changed = false;
        for row in 0..ROW {
            self.row_pins[row].drive_low();
            self.delay.delay_ns(self.config.select_delay_ns);

            let mut value: MatrixRow = 0;
            for (col, pin) in self.col_pins.iter_mut().enumerate() {
                if pin.is_active() {
                    value |= col_bit(col);
                }
            }

            self.row_pins[row].float_high();
            if row + 1 < ROW {
                self.delay.delay_us(self.config.unselect_delay_us);
            }
            changed |= self.raw.store_row(row, value);
        }
        changed
    }

    /// Column pass, returns whether any key differs from the previous column pass.
    pub fn scan_cols(&mut self) -> bool {
        self.release_all();
        let mut changed = false;
        for col in 0..COL {
            self.col_pins[col].drive_low();
            self.delay.delay_ns(self.config.select_delay_ns);

            for (row, pin) in self.row_pins.iter_mut().enumerate() {
                changed |= self.raw.store_col_bit(row, col, pin.is_active());
            }

            self.col_pins[col].float_high();
            if col + 1 < COL {
                self.delay.delay_us(self.config.unselect_delay_us);
            }
        }
        changed
    }
}

impl<R: FlexPin, C: FlexPin, D: DelayNs, DB: DebouncerTrait<ROW>, const ROW: usize, const COL: usize> MatrixTrait
    for DualPhaseMatrix<R, C, D, DB, ROW, COL>
{
    const ROW: usize = ROW;
    const COL: usize = COL;

    fn init(&mut self) {
        self.release_all();
    }

    fn scan(&mut self, now: Tick) -> bool {
        let rows_changed = self.scan_rows();
        let cols_changed = self.scan_cols();
        let changed = rows_changed || cols_changed;

        self.raw.merge();
        if changed {
            trace!("Raw matrix changed: {:?}", self.raw.merged());
        }
        if self.debouncer.debounce(self.raw.merged(), &mut self.debounced, changed, now) {
            trace!("Debounced matrix changed: {:?}", self.debounced);
        }
        changed
    }

    fn raw(&self) -> &[MatrixRow] {
        self.raw.merged()
    }

    fn debounced(&self) -> &[MatrixRow] {
        &self.debounced
    }
}
