// =====================================================================
// File: bench/report.rs
// Date: Oct. 16, 2026
//
// Description:
//   Result record for one benchmark run and its human-readable and JSON
//   renderings. Derived figures (throughput, latency, hit rate) are
//   computed once when the record is built. `BenchmarkReport` pairs the
//   B+Tree run with an optional `BTreeMap` baseline run.
//
// Notes:
//   * Throughput is reported in millions of operations per second.
//   * A phase that took no measurable time reports zero throughput.
// =====================================================================
use serde::Serialize;

use crate::error::Result;
use crate::index::TreeStatistics;

const RULE: &str = "════════════════════════════════════════════════════";

/// Raw measurements from one run, before derived figures are computed.
#[derive(Debug, Clone)]
pub struct Measurements {
    pub build_time_ms: f64,
    pub query_time_ms: f64,
    pub teardown_time_ms: f64,
    pub hits: usize,
}

/// Everything reported about one run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub test_name: String,
    pub order: usize,
    pub data_size: usize,
    pub query_count: usize,

    pub build_time_ms: f64,
    pub insert_throughput: f64,

    pub query_time_ms: f64,
    pub search_throughput: f64,
    pub avg_latency_ns: f64,

    pub teardown_time_ms: f64,

    pub hits: usize,
    /// Percentage of queries that found their key.
    pub hit_rate: f64,

    /// Node statistics; absent for the `BTreeMap` baseline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeStatistics>,
}


impl BenchmarkResult {
    pub fn new(
        test_name: impl Into<String>,
        order: usize,
        data_size: usize,
        query_count: usize,
        measured: Measurements,
        tree: Option<TreeStatistics>,
    ) -> Self {
        let avg_latency_ns = if query_count == 0 {
            0.0
        } else {
            measured.query_time_ms * 1e6 / query_count as f64
        };
        let hit_rate = if query_count == 0 {
            0.0
        } else {
            measured.hits as f64 * 100.0 / query_count as f64
        };

        Self {
            test_name: test_name.into(),
            order,
            data_size,
            query_count,
            build_time_ms: measured.build_time_ms,
            insert_throughput: throughput_mops(data_size, measured.build_time_ms),
            query_time_ms: measured.query_time_ms,
            search_throughput: throughput_mops(query_count, measured.query_time_ms),
            avg_latency_ns,
            teardown_time_ms: measured.teardown_time_ms,
            hits: measured.hits,
            hit_rate,
            tree,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print the full report to stdout.
    pub fn print(&self) {
        println!("\n  {}", RULE);
        println!("  Performance Results: {}", self.test_name);
        println!("  {}", RULE);

        print_subheader("Dataset Info");
        print_metric("Data Size:", self.data_size as f64, "keys");
        print_metric("Query Count:", self.query_count as f64, "queries");
        print_metric("Order:", self.order as f64, "keys/node");

        print_subheader("Build Performance");
        print_metric("Build Time:", self.build_time_ms, "ms");
        print_metric("Insert Throughput:", self.insert_throughput, "M ops/s");

        print_subheader("Query Performance");
        print_metric("Query Time:", self.query_time_ms, "ms");
        print_metric("Search Throughput:", self.search_throughput, "M ops/s");
        print_metric("Avg Latency:", self.avg_latency_ns, "ns/query");
        print_metric("Hit Rate:", self.hit_rate, "%");
        print_metric("Hits:", self.hits as f64, "");

        print_subheader("Teardown");
        print_metric("Teardown Time:", self.teardown_time_ms, "ms");

        if let Some(tree) = &self.tree {
            print_tree_statistics(tree);
        }
    }
}


/// The B+Tree run, and the baseline run when one was requested.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub btree: BenchmarkResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BenchmarkResult>,
}


impl BenchmarkReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn print(&self) {
        self.btree.print();
        if let Some(baseline) = &self.baseline {
            baseline.print();
            print_comparison(&self.btree, baseline);
        }
    }
}


/// How many times faster `candidate` is than `reference`; zero when the
/// reference throughput is zero.
pub fn speedup(candidate: f64, reference: f64) -> f64 {
    if reference <= 0.0 {
        return 0.0;
    }
    candidate / reference
}

pub fn print_comparison(btree: &BenchmarkResult, baseline: &BenchmarkResult) {
    println!("\n  {}", RULE);
    println!("  {} vs {}", btree.test_name, baseline.test_name);
    println!("  {}", RULE);
    print_metric("Insert Speedup:", speedup(btree.insert_throughput, baseline.insert_throughput), "x");
    print_metric("Search Speedup:", speedup(btree.search_throughput, baseline.search_throughput), "x");
    print_metric(
        "Teardown Speedup:",
        speedup(baseline.teardown_time_ms, btree.teardown_time_ms),
        "x",
    );
    println!("  {}", RULE);
}


/// Millions of operations per second; zero when no time was measured.
pub fn throughput_mops(ops: usize, elapsed_ms: f64) -> f64 {
    if elapsed_ms <= 0.0 {
        return 0.0;
    }
    ops as f64 / elapsed_ms / 1_000.0
}

pub fn print_tree_statistics(stats: &TreeStatistics) {
    println!("\n  {}", RULE);
    println!("  Tree Structure Statistics");
    println!("  {}", RULE);
    print_stat("Total Keys:", stats.total_keys);
    print_stat("Leaf Nodes:", stats.leaf_nodes);
    print_stat("Inner Nodes:", stats.inner_nodes);
    print_stat("Height:", stats.height);
    print_stat("Leaf Slot Max:", stats.leaf_slot_max);
    print_stat("Inner Slot Max:", stats.inner_slot_max);
    println!("    {:<30}{:>15.1} %", "Leaf Fill:", stats.leaf_fill_ratio * 100.0);
    println!("  {}", RULE);
}

pub fn print_header(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}", "=".repeat(60));
}

pub fn print_subheader(title: &str) {
    println!("\n  {}", title);
    println!("  {}", "-".repeat(title.chars().count()));
}

pub fn print_metric(name: &str, value: f64, unit: &str) {
    let line = format!("    {:<28}{:>12.2}", name, value);
    if unit.is_empty() {
        println!("{}", line);
    } else {
        println!("{} {}", line, unit);
    }
}

fn print_stat(name: &str, value: usize) {
    println!("    {:<30}{:>15}", name, value);
}
