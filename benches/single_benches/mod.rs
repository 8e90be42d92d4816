mod params;

mod bench_ssc;
pub use bench_ssc::*;
