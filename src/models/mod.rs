//! Simulation domain models.
//!
//! Provides the data types exchanged between the scheduling engine and
//! whatever collects input or renders output.
//!
//! # Domain Mappings
//!
//! | u-cpusim | Textbook term | Presentation |
//! |----------|---------------|--------------|
//! | ProcessSpec | PCB input fields (AT, BT, PR) | Input row |
//! | ProcessResult | ST, CT, WT, TAT, RT | Table row |
//! | ExecutionInterval | Gantt block | Chart cell |
//! | Timeline | Gantt chart | Chart |

mod process;
mod timeline;
mod workload;

pub use process::{ProcessId, ProcessResult, ProcessSpec, Time};
pub use timeline::{ExecutionInterval, Slot, Timeline};
pub use workload::Workload;
