use argh::FromArgs;
use std::path::PathBuf;

use imlog::image::ImageKind;
use imlog::tensor::{DType, DynTensor, NestedArray, TensorError};
use imlog::{ImageLogger, LogError, LoggerConfig, MemorySink, ValidationPolicy};

#[derive(FromArgs)]
/// Validate an array stored as JSON and log it as an image, depth or segmentation map
struct Args {
    /// path to a JSON file holding either a nested array or a {"shape", "data"} tensor
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// one of: image, depth, segmentation
    #[argh(option, short = 'k', default = "ImageKind::Image")]
    kind: ImageKind,

    /// one of: strict, lenient (overrides IMLOG_VALIDATION_POLICY)
    #[argh(option, short = 'p')]
    policy: Option<ValidationPolicy>,

    /// units per meter of a depth image
    #[argh(option, short = 'm')]
    meter: Option<f32>,

    /// the path to log the tensor at
    #[argh(option, default = "String::from(\"image\")")]
    path: String,

    /// log the data as timeless
    #[argh(switch)]
    timeless: bool,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Input {
    Tensor(DynTensor),
    Literal(NestedArray),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    run(args).inspect_err(|err| {
        let tensor_err = match err.downcast_ref::<LogError>() {
            Some(LogError::Tensor(err)) => Some(err),
            _ => err.downcast_ref::<TensorError>(),
        };
        if let Some(err) = tensor_err {
            log::error!("{err}: {}", err.suggestion());
        }
    })
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = LoggerConfig::from_env()?;
    if let Some(policy) = args.policy {
        config = config.with_policy(policy);
    }
    log::info!("validation policy: {}", config.policy);

    let input: Input = serde_json::from_str(&std::fs::read_to_string(&args.input)?)?;

    let memory = MemorySink::new();
    let logger = ImageLogger::new(memory.clone()).with_config(config);

    match (args.kind, input) {
        (ImageKind::Segmentation, Input::Tensor(tensor)) => {
            logger.log_segmentation_image(&args.path, tensor, args.timeless)?
        }
        (ImageKind::Segmentation, Input::Literal(literal)) => {
            logger.log_segmentation_image(&args.path, literal, args.timeless)?
        }
        (kind, input) => {
            let tensor = match input {
                Input::Tensor(tensor) => tensor,
                Input::Literal(literal) => literal.to_tensor(DType::F64)?,
            };
            if kind == ImageKind::Depth {
                logger.log_depth_image(&args.path, tensor, args.meter, args.timeless)?
            } else {
                logger.log_image(&args.path, tensor, args.timeless)?
            }
        }
    }

    for msg in memory.take() {
        println!(
            "{}: shape {:?}, dtype {}, meaning {:?}, meter {:?}, timeless {}",
            msg.path,
            msg.tensor.shape(),
            msg.tensor.dtype(),
            msg.meaning,
            msg.meter,
            msg.timeless,
        );
    }

    Ok(())
}
