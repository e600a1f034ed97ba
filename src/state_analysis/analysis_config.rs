use crate::state_analysis::boundary_filter::BoundaryRegion;

/// Built-in configuration for the bundled Overpass match recording.
///
/// Every identifier and coefficient the analysis needs is named here so the
/// aggregators themselves stay reusable across teams, maps, and rosters.
pub mod defaults {
    /// Vertices of the watched chokepoint region, world coordinates.
    pub const CHOKEPOINT_VERTICES: [[f64; 2]; 5] = [
        [-1735.0, 250.0],
        [-2024.0, 398.0],
        [-2806.0, 742.0],
        [-2472.0, 1233.0],
        [-1565.0, 580.0],
    ];

    /// Vertical band of the chokepoint region, inclusive.
    pub const CHOKEPOINT_Z_BAND: [f64; 2] = [285.0, 421.0];

    /// Objective area watched by the timer and heatmap statistics.
    pub const OBJECTIVE_AREA: &str = "BombsiteB";

    /// Team whose attacking side is measured.
    pub const ATTACKING_TEAM: &str = "Team2";

    /// Team whose defending side feeds the heatmap overlay.
    pub const DEFENDING_TEAM: &str = "Team1";

    /// The attacking team's roster.
    pub const ATTACKING_ROSTER: [&str; 5] =
        ["Player5", "Player6", "Player7", "Player8", "Player9"];

    /// Weapon-class substrings that qualify a loadout, in priority order.
    pub const QUALIFYING_CLASSES: [&str; 2] = ["Rifle", "SMG"];

    /// How many roster players must share a qualifying class.
    pub const QUALIFYING_THRESHOLD: usize = 2;

    /// World-to-pixel scale of the radar overlay, per axis.
    pub const HEATMAP_SCALE: [f64; 2] = [0.75, 0.60];

    /// World-to-pixel offset of the radar overlay, per axis.
    pub const HEATMAP_OFFSET: [f64; 2] = [-120.0, 480.0];

    /// Plot extent of the radar image: `[x_min, x_max, y_min, y_max]`.
    pub const RADAR_EXTENT: [f64; 4] = [-3000.0, 0.0, -1500.0, 1500.0];

    /// Background radar image handed to the rendering sink.
    pub const RADAR_IMAGE: &str = "de_overpass_radar.jpeg";

    /// Weight attached to every projected overlay point.
    pub const POINT_WEIGHT: f64 = 0.25;
}

/// Configuration of the objective-commit timer statistic.
///
/// # Fields
///
/// * `team` - The attacking team being measured.
/// * `area` - The objective area the team commits to.
/// * `roster` - The players whose loadouts are inspected.
/// * `qualifying_classes` - Weapon-class substrings in priority order; a
///   player is awarded to the first class matching any carried label.
/// * `qualifying_threshold` - Minimum players on one class for a round to
///   qualify.
#[derive(Debug, Clone)]
pub struct ObjectiveTimerConfig {
    pub team: String,
    pub area: String,
    pub roster: Vec<String>,
    pub qualifying_classes: Vec<String>,
    pub qualifying_threshold: usize,
}

impl Default for ObjectiveTimerConfig {
    fn default() -> Self {
        Self {
            team: defaults::ATTACKING_TEAM.to_owned(),
            area: defaults::OBJECTIVE_AREA.to_owned(),
            roster: defaults::ATTACKING_ROSTER
                .iter()
                .map(|player| (*player).to_owned())
                .collect(),
            qualifying_classes: defaults::QUALIFYING_CLASSES
                .iter()
                .map(|class| (*class).to_owned())
                .collect(),
            qualifying_threshold: defaults::QUALIFYING_THRESHOLD,
        }
    }
}

/// Configuration of the heatmap overlay projection.
///
/// # Fields
///
/// * `team` - The defending team whose positions are projected.
/// * `area` - The objective area being watched.
/// * `scale` - Per-axis world-to-pixel scale factors.
/// * `offset` - Per-axis pixel offsets applied after scaling.
/// * `extent` - Plot extent of the background image.
/// * `background` - Path of the background image for the rendering sink.
/// * `point_weight` - Weight attached to every projected point.
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    pub team: String,
    pub area: String,
    pub scale: [f64; 2],
    pub offset: [f64; 2],
    pub extent: [f64; 4],
    pub background: String,
    pub point_weight: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            team: defaults::DEFENDING_TEAM.to_owned(),
            area: defaults::OBJECTIVE_AREA.to_owned(),
            scale: defaults::HEATMAP_SCALE,
            offset: defaults::HEATMAP_OFFSET,
            extent: defaults::RADAR_EXTENT,
            background: defaults::RADAR_IMAGE.to_owned(),
            point_weight: defaults::POINT_WEIGHT,
        }
    }
}

/// Top-level configuration of one analysis run.
///
/// # Fields
///
/// * `entry_team` - Team whose boundary entries are counted.
/// * `boundary` - The watched spatial region.
/// * `objective_timer` - The commit-timer statistic configuration.
/// * `heatmap` - The overlay projection configuration.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub entry_team: String,
    pub boundary: BoundaryRegion,
    pub objective_timer: ObjectiveTimerConfig,
    pub heatmap: HeatmapConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            entry_team: defaults::ATTACKING_TEAM.to_owned(),
            boundary: BoundaryRegion::new(
                defaults::CHOKEPOINT_VERTICES.to_vec(),
                defaults::CHOKEPOINT_Z_BAND,
            ),
            objective_timer: ObjectiveTimerConfig::default(),
            heatmap: HeatmapConfig::default(),
        }
    }
}
