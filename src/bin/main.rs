//! KRR Command Line Interface
//!
//! Fits kernel ridge regression to a noisy sinusoid and renders the fit.
//! Every flag is optional; running without arguments uses the demo defaults.

use clap::{Parser, ValueEnum};
use env_logger::Env;
use krr::api::KernelRidge;
use krr::core::{KernelModel, Result};
use krr::data::{generate_sinusoid, SinusoidConfig};
use krr::kernel::{Kernel, KernelSpec};
use krr::persistence::SerializableModel;
use krr::plot::{render_fit, FitSeries, PlotConfig};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "krr")]
#[command(about = "Kernel ridge regression on a noisy sinusoid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "KRR Contributors")]
struct Cli {
    /// Regularization parameter lambda
    #[arg(short, long, default_value = "0.001")]
    lambda: f64,

    /// Kernel family
    #[arg(short, long, value_enum, default_value = "polynomial")]
    kernel: CliKernel,

    /// Polynomial degree
    #[arg(long, default_value = "3")]
    degree: u32,

    /// Polynomial offset term
    #[arg(long, default_value = "1.0")]
    offset: f64,

    /// Gaussian kernel width
    #[arg(long, default_value = "0.1")]
    width: f64,

    /// Grid spacing of the synthetic inputs
    #[arg(long, default_value = "0.01")]
    step: f64,

    /// Exclusive upper end of the input grid
    #[arg(long, default_value = "1.0")]
    end: f64,

    /// Standard deviation of the Gaussian noise
    #[arg(long, default_value = "0.1")]
    noise: f64,

    /// Seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// Output image path (defaults to the executable path with an .svg extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Save the fitted model as JSON
    #[arg(long)]
    save_model: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliKernel {
    /// (x·y + offset)^degree
    #[value(name = "polynomial")]
    Polynomial,
    /// exp(-||x - y||² / width)
    #[value(name = "gaussian")]
    Gaussian,
}

impl Cli {
    fn kernel_spec(&self) -> Result<KernelSpec> {
        match self.kernel {
            CliKernel::Polynomial => KernelSpec::polynomial(self.degree, self.offset),
            CliKernel::Gaussian => KernelSpec::gaussian(self.width),
        }
    }

    fn sinusoid_config(&self) -> SinusoidConfig {
        SinusoidConfig {
            step: self.step,
            end: self.end,
            noise_std: self.noise,
            seed: self.seed,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&cli) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let kernel = cli.kernel_spec()?;
    info!("Kernel: {}, lambda: {}", kernel.name(), cli.lambda);

    let data = generate_sinusoid(&cli.sinusoid_config())?;
    let training = data.training_set()?;

    let model = KernelRidge::with_kernel(kernel)
        .with_lambda(cli.lambda)
        .fit(&training)?;

    // Predict the training inputs themselves to see how well the fit went
    let predictions = model.predict_batch(training.inputs())?;
    let metrics = model.evaluate(&training)?;

    let output = match &cli.output {
        Some(path) => path.clone(),
        None => default_output_path(),
    };

    let plot_config = PlotConfig {
        title: format!("Kernel Ridge Regression with {} Kernel", kernel.family()),
        ..PlotConfig::default()
    };
    render_fit(
        &output,
        &FitSeries {
            inputs: &data.inputs,
            true_targets: &data.true_targets,
            observations: &data.noisy_targets,
            predictions: &predictions,
        },
        &plot_config,
    )?;

    if let Some(model_path) = &cli.save_model {
        SerializableModel::from_fitted_model(&model).save_to_file(model_path)?;
        info!("Model saved to: {model_path:?}");
    }

    println!("=== Kernel Ridge Regression ===");
    println!("Training points: {}", model.n_training_points());
    println!("Kernel: {}", kernel.name());
    println!("Lambda: {}", model.lambda());
    println!("Solver: {:?}", model.solve_method());
    println!("Training MSE: {:.6}", metrics.mse);
    println!("Training R^2: {:.4}", metrics.r_squared);
    println!("Plot saved to: {}", output.display());

    Ok(())
}

/// The running executable's own path with its extension replaced
fn default_output_path() -> PathBuf {
    let program = std::env::args_os()
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_PKG_NAME")));
    output_path_for(&program)
}

fn output_path_for(program: &Path) -> PathBuf {
    program.with_extension("svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("target/debug/krr")),
            PathBuf::from("target/debug/krr.svg")
        );
        assert_eq!(
            output_path_for(Path::new("krr.exe")),
            PathBuf::from("krr.svg")
        );
    }

    #[test]
    fn test_defaults_match_demo() {
        let cli = Cli::parse_from(["krr"]);
        assert_eq!(cli.lambda, 0.001);
        assert_eq!(
            cli.kernel_spec().unwrap(),
            KernelSpec::polynomial(3, 1.0).unwrap()
        );
        let config = cli.sinusoid_config();
        assert_eq!(config.step, 0.01);
        assert_eq!(config.noise_std, 0.1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_gaussian_flags() {
        let cli = Cli::parse_from(["krr", "--kernel", "gaussian", "--width", "0.05"]);
        assert_eq!(
            cli.kernel_spec().unwrap(),
            KernelSpec::gaussian(0.05).unwrap()
        );
    }

    #[test]
    fn test_invalid_kernel_parameters_error() {
        let cli = Cli::parse_from(["krr", "--kernel", "gaussian", "--width", "0"]);
        assert!(cli.kernel_spec().is_err());
    }
}
