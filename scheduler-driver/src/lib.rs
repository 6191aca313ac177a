//! The thin, explicitly out-of-scope driver around `gang-scheduler-core`:
//! cycle loop, environment configuration, and the collaborator traits that
//! stand in for real cluster-API transport (`spec.md` §1, §6).

pub mod cli;
pub mod collaborators;
pub mod config;
pub mod cycle;
pub mod demo;
