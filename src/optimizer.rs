//! Day and itinerary reordering by spatial clustering.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cluster::{DEFAULT_MAX_DISTANCE_M, VisitKind, cluster_day_activities};
use crate::error::OptimizeError;
use crate::itinerary::{DayPlan, Itinerary};
use crate::traits::Located;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterOptions {
    /// Single-linkage threshold in meters.
    pub max_distance_m: f64,
    /// Mean cluster radius above which a day is reported as dispersed.
    pub dispersed_radius_m: f64,
    /// Mean clusters per day above which a day is reported as fragmented.
    pub max_clusters_per_day: f64,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_distance_m: DEFAULT_MAX_DISTANCE_M,
            dispersed_radius_m: 2000.0,
            max_clusters_per_day: 4.0,
        }
    }
}

impl ClusterOptions {
    pub fn from_json(json: &str) -> Result<Self, OptimizeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Reorder a day's activities and meals cluster by cluster.
///
/// Never fails: on error the original day is logged and returned as is.
pub fn optimize_day_plan(day: &DayPlan, max_distance: f64) -> DayPlan {
    match try_optimize_day_plan(day, max_distance) {
        Ok(optimized) => optimized,
        Err(err) => {
            warn!(day = day.day, error = %err, "clustering failed, keeping original order");
            day.clone()
        }
    }
}

/// Fallible form of [`optimize_day_plan`].
///
/// Days with at most one activity, or with no located activity, come back
/// unchanged. Otherwise clustered items are laid out cluster-major and
/// time-minor, while items without a valid location keep their original
/// slot, so the result is always a permutation of the input.
pub fn try_optimize_day_plan(day: &DayPlan, max_distance: f64) -> Result<DayPlan, OptimizeError> {
    if !max_distance.is_finite() || max_distance < 0.0 {
        return Err(OptimizeError::InvalidThreshold { value: max_distance });
    }

    if day.activities.len() <= 1 || !day.activities.iter().any(|a| a.valid_location().is_some()) {
        return Ok(day.clone());
    }

    let clusters = cluster_day_activities(&day.activities, &day.meals, max_distance);

    let mut activity_order = Vec::with_capacity(day.activities.len());
    let mut meal_order = Vec::with_capacity(day.meals.len());
    for item in clusters.iter().flat_map(|cluster| &cluster.items) {
        match item.kind {
            VisitKind::Activity => activity_order.push(item.index),
            VisitKind::Meal => meal_order.push(item.index),
        }
    }

    let mut optimized = day.clone();
    optimized.activities = merge_pass_through(&day.activities, &activity_order);
    optimized.meals = merge_pass_through(&day.meals, &meal_order);

    let expected = day.activities.len() + day.meals.len();
    let actual = optimized.activities.len() + optimized.meals.len();
    if actual != expected {
        return Err(OptimizeError::ItemsLost { expected, actual });
    }

    debug!(
        day = day.day,
        items = expected,
        clusters = clusters.len(),
        "reordered day by clusters"
    );
    Ok(optimized)
}

/// Fill the slots of located entries with `clustered_order`, leaving entries
/// without a valid location where they were.
fn merge_pass_through<T: Located + Clone>(entries: &[T], clustered_order: &[usize]) -> Vec<T> {
    let mut clustered = clustered_order.iter().map(|&index| &entries[index]);
    entries
        .iter()
        .filter_map(|entry| {
            if entry.valid_location().is_some() {
                clustered.next().cloned()
            } else {
                Some(entry.clone())
            }
        })
        .collect()
}

/// Optimize every day independently.
pub fn optimize_itinerary_by_clustering(itinerary: &Itinerary, max_distance: f64) -> Itinerary {
    #[cfg(feature = "parallel")]
    let days: Vec<DayPlan> = itinerary
        .days
        .par_iter()
        .map(|day| optimize_day_plan(day, max_distance))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let days: Vec<DayPlan> = itinerary
        .days
        .iter()
        .map(|day| optimize_day_plan(day, max_distance))
        .collect();

    info!(days = days.len(), max_distance_m = max_distance, "optimized itinerary");

    Itinerary {
        days,
        total_cost: itinerary.total_cost,
        currency: itinerary.currency.clone(),
        notes: itinerary.notes.clone(),
    }
}

pub fn optimize_itinerary_with(itinerary: &Itinerary, options: &ClusterOptions) -> Itinerary {
    optimize_itinerary_by_clustering(itinerary, options.max_distance_m)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayClusterSummary {
    pub day: u32,
    pub cluster_count: usize,
    /// Items with a valid location.
    pub clustered_items: usize,
    /// Items left out of clustering for lack of a valid location.
    pub pass_through_items: usize,
    pub mean_radius_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusteringReport {
    pub total_days: usize,
    pub days_with_clusters: usize,
    pub total_clusters: usize,
    /// Averaged over days that produced at least one cluster.
    pub avg_clusters_per_day: f64,
    /// Averaged over all clusters.
    pub avg_cluster_radius_m: f64,
    pub recommendations: Vec<String>,
    pub days: Vec<DayClusterSummary>,
}

/// Diagnostic clustering summary with default thresholds. Read-only.
pub fn analyze_clustering_quality(itinerary: &Itinerary) -> ClusteringReport {
    analyze_clustering_quality_with(itinerary, &ClusterOptions::default())
}

pub fn analyze_clustering_quality_with(itinerary: &Itinerary, options: &ClusterOptions) -> ClusteringReport {
    let mut days = Vec::with_capacity(itinerary.days.len());
    let mut total_clusters = 0;
    let mut radius_sum = 0.0;

    for day in &itinerary.days {
        let clusters = cluster_day_activities(&day.activities, &day.meals, options.max_distance_m);
        let clustered_items: usize = clusters.iter().map(|c| c.len()).sum();
        let day_radius: f64 = clusters.iter().map(|c| c.radius_m).sum();

        total_clusters += clusters.len();
        radius_sum += day_radius;

        days.push(DayClusterSummary {
            day: day.day,
            cluster_count: clusters.len(),
            clustered_items,
            pass_through_items: day.activities.len() + day.meals.len() - clustered_items,
            mean_radius_m: if clusters.is_empty() { 0.0 } else { day_radius / clusters.len() as f64 },
        });
    }

    let days_with_clusters = days.iter().filter(|d| d.cluster_count > 0).count();
    let avg_clusters_per_day = if days_with_clusters == 0 {
        0.0
    } else {
        total_clusters as f64 / days_with_clusters as f64
    };
    let avg_cluster_radius_m = if total_clusters == 0 {
        0.0
    } else {
        radius_sum / total_clusters as f64
    };

    let mut recommendations = Vec::new();
    if days_with_clusters == 0 {
        recommendations.push("No located activities to analyze.".to_string());
    } else {
        if avg_cluster_radius_m > options.dispersed_radius_m {
            recommendations.push(format!(
                "Attractions are dispersed: average cluster radius is {:.0} m. Consider grouping nearby sights on the same day.",
                avg_cluster_radius_m
            ));
        }
        if avg_clusters_per_day > options.max_clusters_per_day {
            recommendations.push(format!(
                "Too many distinct areas per day: {:.1} clusters on average. Consider spreading areas across more days.",
                avg_clusters_per_day
            ));
        }
        if recommendations.is_empty() {
            recommendations.push("Daily routes are geographically compact.".to_string());
        }
    }

    info!(
        total_days = itinerary.days.len(),
        days_with_clusters,
        total_clusters,
        "analyzed clustering quality"
    );

    ClusteringReport {
        total_days: itinerary.days.len(),
        days_with_clusters,
        total_clusters,
        avg_clusters_per_day,
        avg_cluster_radius_m,
        recommendations,
        days,
    }
}
