use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::Directive, prelude::*};
use tracing_timing::{Builder, Histogram};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use parking_lot::RwLock;
use std::time::{Duration, Instant};
use std::cell::RefCell;
use crate::core::neighborhood::Neighborhood;

const HISTOGRAM_MAX_NS: u64 = 60_000_000_000;

// Categories for the timing report
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum OperationCategory {
    Search,
    Initialization,
    Move {
        neighborhood: Neighborhood,
    },
    FileIO {
        subcategory: FileIOType,
    },
    Other,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum FileIOType {
    InstanceLoad,
    SolutionExport,
    LedgerExport,
    ReportSave,
}

impl OperationCategory {
    pub fn as_str(&self) -> String {
        match self {
            OperationCategory::Search => "Search".to_string(),
            OperationCategory::Initialization => "Initialization".to_string(),
            OperationCategory::Move { neighborhood } => format!("Move - {}", neighborhood.as_str()),
            OperationCategory::FileIO { subcategory } => {
                format!("File I/O - {}", match subcategory {
                    FileIOType::InstanceLoad => "Instance Load",
                    FileIOType::SolutionExport => "Solution Export",
                    FileIOType::LedgerExport => "Ledger Export",
                    FileIOType::ReportSave => "Report Save",
                })
            },
            OperationCategory::Other => "Other Operations".to_string(),
        }
    }
}

thread_local! {
    static TIMING_STACK: RefCell<Vec<(String, OperationCategory, Instant)>> = RefCell::new(Vec::new());
}

lazy_static! {
    static ref TIMING_ENABLED: AtomicBool = AtomicBool::new(false);
    static ref FUNCTION_TIMINGS: Arc<RwLock<HashMap<String, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
    static ref CATEGORY_TIMINGS: Arc<RwLock<HashMap<OperationCategory, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
    static ref HIERARCHICAL_TIMINGS: Arc<RwLock<HashMap<String, (Duration, usize, Vec<String>)>>> = Arc::new(RwLock::new(HashMap::new()));
}

pub struct TimingGuard {
    function_name: String,
    category: OperationCategory,
    start: Instant,
    tracked: bool,
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        if self.tracked {
            record_timing_end(&self.function_name, self.start.elapsed(), &self.category);
        }
    }
}

/// Starts timing `function_name`; the sample is recorded when the guard drops.
/// A no-op unless timing was enabled in `init_logging`.
pub fn start_timing(function_name: &str, category: OperationCategory) -> TimingGuard {
    let tracked = is_timing_enabled();
    if tracked {
        TIMING_STACK.with(|stack| {
            stack.borrow_mut().push((function_name.to_string(), category.clone(), Instant::now()));
        });
    }

    TimingGuard {
        function_name: function_name.to_string(),
        category,
        start: Instant::now(),
        tracked,
    }
}

fn new_histogram() -> Option<Histogram<u64>> {
    Histogram::<u64>::new_with_bounds(1, HISTOGRAM_MAX_NS, 3).ok()
}

fn record_into<K: std::hash::Hash + Eq>(map: &mut HashMap<K, Histogram<u64>>, key: K, duration_ns: u64) {
    let histogram = match map.entry(key) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => match new_histogram() {
            Some(histogram) => entry.insert(histogram),
            None => return,
        },
    };
    let _ = histogram.record(duration_ns);
}

fn record_timing_end(function_name: &str, duration: Duration, category: &OperationCategory) {
    let duration_ns = (duration.as_nanos() as u64).clamp(1, HISTOGRAM_MAX_NS);

    // Pop from timing stack and note the caller
    TIMING_STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        if stack.pop().is_some() {
            let mut hierarchical = HIERARCHICAL_TIMINGS.write();
            let entry = hierarchical
                .entry(function_name.to_string())
                .or_insert((Duration::from_nanos(0), 0, Vec::new()));

            entry.0 += duration;
            entry.1 += 1;

            if let Some((parent_name, _, _)) = stack.last() {
                if !entry.2.contains(parent_name) {
                    entry.2.push(parent_name.clone());
                }
            }
        }
    });

    record_into(&mut FUNCTION_TIMINGS.write(), function_name.to_string(), duration_ns);
    record_into(&mut CATEGORY_TIMINGS.write(), category.clone(), duration_ns);
}

/// Installs the global tracing subscriber. Safe to call more than once; later
/// calls leave the first subscriber in place.
pub fn init_logging(enable_timing: bool) {
    TIMING_ENABLED.store(enable_timing, Ordering::SeqCst);

    let mut env_filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());
    if let Ok(directive) = "windgrid=debug".parse::<Directive>() {
        env_filter = env_filter.add_directive(directive);
    }

    let result = match (enable_timing, new_histogram()) {
        (true, Some(template)) => {
            let timing_layer = Builder::default().layer(move || Histogram::new_from(&template));

            let subscriber = tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .with(timing_layer.boxed());

            tracing::subscriber::set_global_default(subscriber)
        }
        _ => {
            let subscriber = tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty());

            tracing::subscriber::set_global_default(subscriber)
        }
    };

    if result.is_err() {
        tracing::warn!("Tracing subscriber already installed");
    }
}

pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::SeqCst)
}

pub fn print_timing_report() {
    if !is_timing_enabled() {
        return;
    }

    println!("\nDetailed Performance Report");
    println!("==========================");

    println!("\nHierarchical Timing Analysis:");
    println!("---------------------------");
    let hierarchical = HIERARCHICAL_TIMINGS.read();
    let mut entries: Vec<_> = hierarchical.iter().collect();
    entries.sort_by(|a, b| b.1.0.cmp(&a.1.0));

    for (function_name, (total_duration, count, parents)) in entries {
        let avg_duration = total_duration.div_f64(*count as f64);
        println!(
            "{}: total={:.2}s, count={}, avg={:.3}ms{}",
            function_name,
            total_duration.as_secs_f64(),
            count,
            avg_duration.as_secs_f64() * 1000.0,
            if !parents.is_empty() {
                format!("\n  Called by: {}", parents.join(", "))
            } else {
                String::new()
            }
        );
    }

    println!("\nPerformance by Category:");
    println!("------------------------");
    let category_timings = CATEGORY_TIMINGS.read();
    let mut category_vec: Vec<_> = category_timings.iter().collect();
    category_vec.sort_by(|a, b| b.1.mean().total_cmp(&a.1.mean()));

    let total_time: f64 = category_vec.iter()
        .map(|(_, hist)| hist.mean() * (hist.len() as f64))
        .sum();

    for (category, histogram) in category_vec {
        let category_total = histogram.mean() * (histogram.len() as f64);
        let percentage = if total_time > 0.0 { (category_total / total_time) * 100.0 } else { 0.0 };
        println!(
            "{}: {:.1}% of total time\n  mean={:.3}ms, p95={:.3}ms, p99={:.3}ms, count={}, total={:.2}s",
            category.as_str(),
            percentage,
            histogram.mean() / 1_000_000.0,
            histogram.value_at_quantile(0.95) as f64 / 1_000_000.0,
            histogram.value_at_quantile(0.99) as f64 / 1_000_000.0,
            histogram.len(),
            category_total / 1_000_000_000.0,
        );
    }

    println!("==========================\n");
}
