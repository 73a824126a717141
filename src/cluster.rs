//! Greedy single-linkage clustering of a day's visits.
//!
//! One pass over the time-ordered visits: each unassigned visit seeds a
//! cluster, and the cluster absorbs every still-unassigned visit lying within
//! the threshold of ANY current member. Members added during the scan are
//! compared against later candidates in the same scan, so the result depends
//! on the time order of the input. It is deterministic but not optimal.

use serde::Serialize;
use tracing::trace;

use crate::haversine::Haversine;
use crate::itinerary::{Activity, Coordinate, Location, Meal};
use crate::traits::{DistanceMetric, Located};

/// Default clustering threshold in meters.
pub const DEFAULT_MAX_DISTANCE_M: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitKind {
    Activity,
    Meal,
}

/// A clusterable activity or meal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitItem {
    pub kind: VisitKind,
    /// Position in the source activities or meals list.
    pub index: usize,
    pub time: String,
    pub location: Location,
}

impl VisitItem {
    pub fn coordinates(&self) -> &Coordinate {
        &self.location.coordinates
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Members in time order.
    pub items: Vec<VisitItem>,
    /// Unweighted mean of member coordinates.
    pub centroid: Location,
    /// Largest member-to-centroid distance, meters.
    pub radius_m: f64,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cluster a day's activities and meals using haversine distance.
pub fn cluster_day_activities(activities: &[Activity], meals: &[Meal], max_distance_m: f64) -> Vec<Cluster> {
    cluster_day_activities_with(&Haversine, activities, meals, max_distance_m)
}

/// Cluster with a caller-supplied distance metric.
///
/// Visits without a valid location are left out. Clusters come back in the
/// order their seed visit occurs in the day.
pub fn cluster_day_activities_with<M: DistanceMetric>(
    metric: &M,
    activities: &[Activity],
    meals: &[Meal],
    max_distance_m: f64,
) -> Vec<Cluster> {
    let items = visit_items(activities, meals);
    if items.is_empty() {
        return Vec::new();
    }

    let mut assigned = vec![false; items.len()];
    let mut clusters = Vec::new();

    for seed in 0..items.len() {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;
        let mut members = vec![seed];

        for candidate in 0..items.len() {
            if assigned[candidate] {
                continue;
            }
            let nearest = members
                .iter()
                .map(|&member| metric.distance_m(items[member].coordinates(), items[candidate].coordinates()))
                .fold(f64::INFINITY, f64::min);

            if nearest <= max_distance_m {
                members.push(candidate);
                assigned[candidate] = true;
            }
        }

        let mut cluster_items: Vec<VisitItem> = members.into_iter().map(|i| items[i].clone()).collect();
        cluster_items.sort_by(|a, b| a.time.cmp(&b.time));

        let cluster = build_cluster(metric, cluster_items, clusters.len());
        trace!(
            seed_time = %cluster.items[0].time,
            members = cluster.len(),
            radius_m = cluster.radius_m,
            "formed cluster"
        );
        clusters.push(cluster);
    }

    clusters
}

/// Wrap activities then meals into visit items, drop those without a valid
/// location, and order the rest by time of day.
///
/// `HH:MM` is fixed width, so string order is chronological. The sort is
/// stable; equal times keep activities first, then source order.
pub fn visit_items(activities: &[Activity], meals: &[Meal]) -> Vec<VisitItem> {
    let mut items: Vec<VisitItem> = wrap(VisitKind::Activity, activities)
        .chain(wrap(VisitKind::Meal, meals))
        .collect();
    items.sort_by(|a, b| a.time.cmp(&b.time));
    items
}

fn wrap<T: Located>(kind: VisitKind, entries: &[T]) -> impl Iterator<Item = VisitItem> + '_ {
    entries.iter().enumerate().filter_map(move |(index, entry)| {
        entry.valid_location().map(|location| VisitItem {
            kind,
            index,
            time: entry.time().to_string(),
            location: location.clone(),
        })
    })
}

fn build_cluster<M: DistanceMetric>(metric: &M, items: Vec<VisitItem>, ordinal: usize) -> Cluster {
    let count = items.len() as f64;
    let (sum_lng, sum_lat) = items
        .iter()
        .fold((0.0, 0.0), |(lng, lat), item| (lng + item.coordinates().lng, lat + item.coordinates().lat));
    let center = Coordinate::new(sum_lng / count, sum_lat / count);

    let radius_m = items
        .iter()
        .map(|item| metric.distance_m(item.coordinates(), &center))
        .fold(0.0, f64::max);

    Cluster {
        items,
        centroid: Location::new(format!("Cluster {}", ordinal + 1), "", center),
        radius_m,
    }
}
