//! Cluster layout types and rendering logic.
//!
//! This module defines the immutable [`ClusterState`] snapshot built from the
//! vehicle/ECU values, the [`ClusterChanges`] diff, and the
//! [`render_cluster`] function that redraws a frame through the session
//! primitives.

use heapless::String;

use crate::error::DisplayError;
use crate::session::DisplaySession;
use crate::sink::HardwareSink;

/// Maximum gear label length in bytes.
pub const GEAR_LABEL_LEN: usize = 8;

// ── ClusterLayout ────────────────────────────────────────────────────────

/// Geometry of the cluster screen.
///
/// All layout geometry lives here; there are no module-level layout
/// constants. [`ClusterLayout::default()`] fits an 800×480 panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterLayout {
    /// X coordinate of the field labels. Default: 20.
    pub label_x: u16,
    /// X coordinate of values and bars. Default: 80.
    pub value_x: u16,
    /// Row of the speed readout. Default: 20.
    pub speed_y: u16,
    /// Row of the rpm readout. Default: 40.
    pub rpm_y: u16,
    /// Row of the odometer readout. Default: 60.
    pub odometer_y: u16,
    /// Row of the gear label. Default: 80.
    pub gear_y: u16,
    /// Top of the fuel bar. Default: 110.
    pub fuel_bar_y: u16,
    /// Top of the battery state-of-charge bar. Default: 140.
    pub battery_bar_y: u16,
    /// Width of both bars. Default: 300.
    pub bar_width: u16,
    /// Height of both bars. Default: 16.
    pub bar_height: u16,
    /// Row of the first warning label. Default: 180.
    pub warning_y: u16,
    /// Vertical distance between warning labels. Default: 12.
    pub warning_spacing: u16,
}

impl Default for ClusterLayout {
    fn default() -> Self {
        Self {
            label_x: 20,
            value_x: 80,
            speed_y: 20,
            rpm_y: 40,
            odometer_y: 60,
            gear_y: 80,
            fuel_bar_y: 110,
            battery_bar_y: 140,
            bar_width: 300,
            bar_height: 16,
            warning_y: 180,
            warning_spacing: 12,
        }
    }
}

// ── ClusterState ─────────────────────────────────────────────────────────

/// Immutable snapshot of everything the cluster needs to render one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterState {
    /// Vehicle speed in km/h.
    pub speed_kmh: i32,
    /// Engine speed.
    pub rpm: i32,
    /// Fuel level, 0–100 (values above 100 render as a full bar).
    pub fuel_percent: u8,
    /// Odometer reading in km.
    pub odometer_km: i32,
    /// Short gear label such as `"P"`, `"D"` or `"3"`.
    pub gear: String<GEAR_LABEL_LEN>,
    /// Battery state of charge, `None` when the BMS has no estimate.
    pub battery_soc: Option<u8>,
    /// Low-fuel indicator.
    pub low_fuel: bool,
    /// Seat-belt indicator.
    pub seatbelt_warning: bool,
}

impl ClusterState {
    /// Construct from live values with no battery estimate and no warnings.
    ///
    /// The gear label is silently truncated (on a character boundary) if
    /// longer than [`GEAR_LABEL_LEN`] bytes.
    pub fn from_values(
        speed_kmh: i32,
        rpm: i32,
        fuel_percent: u8,
        odometer_km: i32,
        gear: &str,
    ) -> Self {
        let mut label = String::new();
        for c in gear.chars() {
            if label.push(c).is_err() {
                break;
            }
        }

        Self {
            speed_kmh,
            rpm,
            fuel_percent,
            odometer_km,
            gear: label,
            ..Self::default()
        }
    }

    /// Attach a battery state-of-charge estimate.
    pub fn with_battery_soc(mut self, soc: u8) -> Self {
        self.battery_soc = Some(soc);
        self
    }

    /// Set the warning indicators.
    pub fn with_warnings(mut self, low_fuel: bool, seatbelt_warning: bool) -> Self {
        self.low_fuel = low_fuel;
        self.seatbelt_warning = seatbelt_warning;
        self
    }
}

// ── ClusterChanges ───────────────────────────────────────────────────────

/// Identifies which fields changed between two [`ClusterState`] snapshots.
///
/// Used by callers to skip redraws when nothing changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClusterChanges {
    pub speed: bool,
    pub rpm: bool,
    pub fuel: bool,
    pub odometer: bool,
    pub gear: bool,
    pub battery: bool,
    /// `true` if either warning indicator flipped.
    pub warnings: bool,
}

impl ClusterChanges {
    /// Diff two states field-by-field.
    pub fn detect(old: &ClusterState, new: &ClusterState) -> Self {
        Self {
            speed: old.speed_kmh != new.speed_kmh,
            rpm: old.rpm != new.rpm,
            fuel: old.fuel_percent != new.fuel_percent,
            odometer: old.odometer_km != new.odometer_km,
            gear: old.gear != new.gear,
            battery: old.battery_soc != new.battery_soc,
            warnings: old.low_fuel != new.low_fuel
                || old.seatbelt_warning != new.seatbelt_warning,
        }
    }

    /// Returns `true` if any field changed.
    pub fn any_changed(&self) -> bool {
        self.speed
            || self.rpm
            || self.fuel
            || self.odometer
            || self.gear
            || self.battery
            || self.warnings
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Redraw the whole cluster from `state`.
///
/// Clears the panel first, then draws every field through the session
/// primitives. Each primitive flushes on its own, so the sink sees the
/// frame being built up.
///
/// # Layout
///
/// ```text
/// SPD   123
/// RPM   6150
/// ODO   48211
/// GEAR  D
/// FUEL  [██████████░░░░░░░░]
/// BAT   [██████████████░░░░]   (only with an estimate)
///
/// LOW FUEL                      (only when set)
/// SEATBELT                      (only when set)
/// ```
///
/// # Errors
///
/// Returns [`DisplayError::HardwareFault`] if the session is not ready, or
/// [`DisplayError::InvalidParameter`] if the layout has a zero-sized bar.
pub fn render_cluster<S>(
    session: &mut DisplaySession<S>,
    state: &ClusterState,
    layout: &ClusterLayout,
) -> Result<(), DisplayError>
where
    S: HardwareSink,
{
    session.clear()?;

    let (lx, vx) = (layout.label_x, layout.value_x);

    session.draw_text(lx, layout.speed_y, "SPD")?;
    session.draw_number(vx, layout.speed_y, state.speed_kmh)?;

    session.draw_text(lx, layout.rpm_y, "RPM")?;
    session.draw_number(vx, layout.rpm_y, state.rpm)?;

    session.draw_text(lx, layout.odometer_y, "ODO")?;
    session.draw_number(vx, layout.odometer_y, state.odometer_km)?;

    session.draw_text(lx, layout.gear_y, "GEAR")?;
    session.draw_text(vx, layout.gear_y, state.gear.as_str())?;

    session.draw_text(lx, layout.fuel_bar_y, "FUEL")?;
    session.draw_rectangle_fill(
        vx,
        layout.fuel_bar_y,
        layout.bar_width,
        layout.bar_height,
        state.fuel_percent,
    )?;

    if let Some(soc) = state.battery_soc {
        session.draw_text(lx, layout.battery_bar_y, "BAT")?;
        session.draw_rectangle_fill(
            vx,
            layout.battery_bar_y,
            layout.bar_width,
            layout.bar_height,
            soc,
        )?;
    }

    let mut warning_y = layout.warning_y;
    if state.low_fuel {
        session.draw_text(lx, warning_y, "LOW FUEL")?;
        warning_y = warning_y.saturating_add(layout.warning_spacing);
    }
    if state.seatbelt_warning {
        session.draw_text(lx, warning_y, "SEATBELT")?;
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────
