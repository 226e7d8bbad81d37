//! Reference adjacency-graph board.
//!
//! [`MapBoard`] implements [`BoardQuery`] over an undirected province graph.
//! Fleet movement is one hop to an adjacent sea. Army movement is one hop to
//! adjacent land, or further through chains of ocean provinces that hold an
//! available friendly fleet; path enumeration keeps the full province
//! sequence so the engine can count ocean hops and charge convoys.

use std::collections::{BTreeMap, BTreeSet};

use super::nation::Nation;
use super::province::{FactoryKind, Province};
use super::query::{BoardQuery, NeighborQuery, PathQuery};

/// Static facts about one province.
#[derive(Debug, Clone, Copy, Default)]
struct ProvinceInfo {
    owner: Option<Nation>,
    is_ocean: bool,
    factory_kind: Option<FactoryKind>,
}

/// An in-memory board built from province facts and undirected edges.
#[derive(Debug, Clone, Default)]
pub struct MapBoard {
    provinces: BTreeMap<Province, ProvinceInfo>,
    edges: BTreeMap<Province, BTreeSet<Province>>,
    homes: BTreeMap<Nation, BTreeSet<Province>>,
}

impl MapBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        MapBoard::default()
    }

    /// Registers a land province, optionally owned and factory-capable.
    pub fn add_land(
        &mut self,
        name: &str,
        owner: Option<Nation>,
        factory_kind: Option<FactoryKind>,
    ) {
        let province = Province::from(name);
        self.provinces.insert(
            province.clone(),
            ProvinceInfo { owner, is_ocean: false, factory_kind },
        );
        if let Some(nation) = owner {
            self.homes.entry(nation).or_default().insert(province);
        }
    }

    /// Registers an ocean province.
    pub fn add_ocean(&mut self, name: &str) {
        self.provinces.insert(
            Province::from(name),
            ProvinceInfo { owner: None, is_ocean: true, factory_kind: None },
        );
    }

    /// Connects two provinces with an undirected edge.
    pub fn connect(&mut self, a: &str, b: &str) {
        let a = Province::from(a);
        let b = Province::from(b);
        self.edges.entry(a.clone()).or_default().insert(b.clone());
        self.edges.entry(b).or_default().insert(a);
    }

    fn info(&self, province: &Province) -> ProvinceInfo {
        self.provinces.get(province).copied().unwrap_or_default()
    }

    fn neighbors(&self, province: &Province) -> impl Iterator<Item = &Province> {
        self.edges.get(province).into_iter().flatten()
    }

    /// Depth-first enumeration of army paths: every intermediate hop must be
    /// an ocean carrying an available friendly fleet, and each province is
    /// visited at most once per path.
    fn army_paths(&self, query: &PathQuery) -> Vec<Vec<Province>> {
        let mut paths = Vec::new();
        let mut trail = vec![query.origin.clone()];
        let mut visited = BTreeSet::new();
        visited.insert(query.origin.clone());
        self.extend_army_path(query, &mut trail, &mut visited, &mut paths);
        paths
    }

    fn extend_army_path(
        &self,
        query: &PathQuery,
        trail: &mut Vec<Province>,
        visited: &mut BTreeSet<Province>,
        paths: &mut Vec<Vec<Province>>,
    ) {
        let here = trail[trail.len() - 1].clone();
        for next in self.neighbors(&here) {
            if visited.contains(next) {
                continue;
            }
            let info = self.info(next);
            if info.is_ocean {
                if !query.friendly_fleets.contains(next) {
                    continue;
                }
                trail.push(next.clone());
                visited.insert(next.clone());
                self.extend_army_path(query, trail, visited, paths);
                visited.remove(next);
                trail.pop();
            } else {
                if query.is_occupied && info.owner != Some(query.nation) {
                    continue;
                }
                trail.push(next.clone());
                paths.push(trail.clone());
                trail.pop();
            }
        }
    }
}

impl BoardQuery for MapBoard {
    fn owner_of(&self, province: &Province) -> Option<Nation> {
        self.info(province).owner
    }

    fn is_ocean(&self, province: &Province) -> bool {
        self.info(province).is_ocean
    }

    fn factory_kind_of(&self, province: &Province) -> Option<FactoryKind> {
        self.info(province).factory_kind
    }

    fn home_provinces_of(&self, nation: Nation) -> Vec<Province> {
        self.homes
            .get(&nation)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn provinces(&self) -> Vec<Province> {
        self.provinces.keys().cloned().collect()
    }

    fn neighbors_for(&self, query: &NeighborQuery) -> Vec<Province> {
        if query.is_fleet {
            self.neighbors(&query.origin)
                .filter(|p| self.info(p).is_ocean)
                .filter(|_| !query.is_occupied)
                .cloned()
                .collect()
        } else {
            let paths = self.army_paths(&PathQuery {
                origin: query.origin.clone(),
                nation: query.nation,
                friendly_fleets: query.friendly_fleets.clone(),
                is_occupied: query.is_occupied,
            });
            let mut out = BTreeSet::new();
            for path in paths {
                if let Some(dest) = path.last() {
                    out.insert(dest.clone());
                }
            }
            out.into_iter().collect()
        }
    }

    fn paths_from(&self, query: &PathQuery) -> Vec<Vec<Province>> {
        self.army_paths(query)
    }
}
