//! World orchestration: envelopes per road segment, merged into road borders.
//!
//! `World` owns one generation of geometry. It never holds the graph; each
//! `generate` call reads a snapshot and replaces everything wholesale, so the
//! result is a pure function of (graph, config). There is no change tracking:
//! callers re-run `generate` after editing their graph.

use tracing::debug;

use crate::cancel::CancelToken;
use crate::envelope::Envelope;
use crate::error::WorldError;
use crate::geom2::{GeomCfg, Point, Segment};
use crate::graph::RoadGraph;
use crate::poly::{multi_break_cancellable, Polygon};

/// How merged borders are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Kept edges per envelope, in envelope order.
    #[default]
    MultiBreak,
    /// One flat boundary list (the per-envelope lists concatenated).
    Union,
}

/// Road parameters shared by envelopes and markings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadParams {
    pub width: f64,
    pub roundness: u32,
}

impl Default for RoadParams {
    fn default() -> Self {
        Self {
            width: 100.0,
            roundness: 10,
        }
    }
}

/// Generation configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldCfg {
    pub road: RoadParams,
    pub merge: MergePolicy,
    pub geom: GeomCfg,
}

/// Merged road borders in the shape selected by `MergePolicy`.
#[derive(Clone, Debug, PartialEq)]
pub enum Borders {
    PerEnvelope(Vec<Vec<Segment>>),
    Flat(Vec<Segment>),
}

impl Default for Borders {
    fn default() -> Self {
        Borders::PerEnvelope(Vec::new())
    }
}

impl Borders {
    /// Every border segment in output order, whatever the shape.
    pub fn segments(&self) -> Box<dyn Iterator<Item = &Segment> + '_> {
        match self {
            Borders::PerEnvelope(rows) => Box::new(rows.iter().flatten()),
            Borders::Flat(list) => Box::new(list.iter()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Borders::PerEnvelope(rows) => rows.iter().map(Vec::len).sum(),
            Borders::Flat(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One generation of road geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World {
    cfg: WorldCfg,
    envelopes: Vec<Envelope>,
    borders: Borders,
    intersections: Vec<Point>,
}

impl World {
    /// Empty world; nothing is generated until `generate`.
    pub fn new(cfg: WorldCfg) -> Self {
        Self {
            cfg,
            ..Default::default()
        }
    }

    /// Construct and generate in one step.
    pub fn build<G: RoadGraph + ?Sized>(graph: &G, cfg: WorldCfg) -> Result<Self, WorldError> {
        let mut world = Self::new(cfg);
        world.generate(graph)?;
        Ok(world)
    }

    #[inline]
    pub fn cfg(&self) -> &WorldCfg {
        &self.cfg
    }

    /// Change parameters; takes effect on the next `generate`.
    pub fn set_cfg(&mut self, cfg: WorldCfg) {
        self.cfg = cfg;
    }

    #[inline]
    pub fn envelopes(&self) -> &[Envelope] {
        &self.envelopes
    }

    #[inline]
    pub fn borders(&self) -> &Borders {
        &self.borders
    }

    /// Crossing points found while merging (for debug overlays).
    #[inline]
    pub fn intersections(&self) -> &[Point] {
        &self.intersections
    }

    /// Rebuild envelopes and borders from `graph`.
    pub fn generate<G: RoadGraph + ?Sized>(&mut self, graph: &G) -> Result<(), WorldError> {
        self.generate_cancellable(graph, &CancelToken::new())
    }

    /// `generate` that can be aborted from another thread through `cancel`.
    ///
    /// On any error the world is left empty rather than half-built.
    pub fn generate_cancellable<G: RoadGraph + ?Sized>(
        &mut self,
        graph: &G,
        cancel: &CancelToken,
    ) -> Result<(), WorldError> {
        self.clear();
        let (envelopes, borders, intersections) = self.compute(graph.segments(), cancel)?;
        debug!(
            segments = envelopes.len(),
            borders = borders.len(),
            intersections = intersections.len(),
            policy = ?self.cfg.merge,
            "generate"
        );
        self.envelopes = envelopes;
        self.borders = borders;
        self.intersections = intersections;
        Ok(())
    }

    /// Drop all generated geometry, keeping the configuration.
    pub fn clear(&mut self) {
        self.envelopes.clear();
        self.borders = Borders::default();
        self.intersections.clear();
    }

    fn compute(
        &self,
        segments: &[Segment],
        cancel: &CancelToken,
    ) -> Result<(Vec<Envelope>, Borders, Vec<Point>), WorldError> {
        let WorldCfg { road, merge, geom } = self.cfg;
        let envelopes = segments
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Envelope::with_cfg(*s, road.width, road.roundness, &geom)
                    .map_err(|source| WorldError::Envelope { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Fewer than two envelopes: nothing to merge.
        if envelopes.len() < 2 {
            let rows: Vec<Vec<Segment>> = envelopes.iter().map(|e| e.poly.edges()).collect();
            return Ok((envelopes, shape(rows, merge), Vec::new()));
        }

        let polys: Vec<Polygon> = envelopes.iter().map(|e| e.poly.clone()).collect();
        let merged = multi_break_cancellable(&polys, &geom, cancel)?;
        Ok((envelopes, shape(merged.kept, merge), merged.intersections))
    }
}

fn shape(rows: Vec<Vec<Segment>>, merge: MergePolicy) -> Borders {
    match merge {
        MergePolicy::MultiBreak => Borders::PerEnvelope(rows),
        MergePolicy::Union => Borders::Flat(rows.into_iter().flatten().collect()),
    }
}
