use anyhow::Result;
use neg_filter::{CliConfig, FilterEngine, NegativeFilterPipeline, WriterSink};

fn run_with_input(input: Vec<i32>) -> Result<(usize, String)> {
    let pipeline =
        NegativeFilterPipeline::new(WriterSink::new(Vec::new()), CliConfig::with_input(input));
    let mut engine = FilterEngine::new(pipeline);

    let written = engine.run()?;
    let bytes = engine.into_pipeline().into_sink().into_inner();
    Ok((written, String::from_utf8(bytes)?))
}

#[test]
fn test_default_run_prints_negatives_in_order() -> Result<()> {
    let pipeline = NegativeFilterPipeline::new(WriterSink::new(Vec::new()), CliConfig::default());
    let mut engine = FilterEngine::new(pipeline);

    let written = engine.run()?;
    let output = String::from_utf8(engine.into_pipeline().into_sink().into_inner())?;

    assert_eq!(written, 4);
    assert_eq!(output, "-1\n-2\n-3\n-4\n");
    Ok(())
}

#[test]
fn test_run_with_no_negatives_prints_nothing() -> Result<()> {
    let (written, output) = run_with_input(vec![1, 2, 3])?;

    assert_eq!(written, 0);
    assert!(output.is_empty());
    Ok(())
}

#[test]
fn test_run_with_only_negatives_prints_all() -> Result<()> {
    let (written, output) = run_with_input(vec![-1, -2])?;

    assert_eq!(written, 2);
    assert_eq!(output, "-1\n-2\n");
    Ok(())
}

#[test]
fn test_run_with_empty_input() -> Result<()> {
    let (written, output) = run_with_input(Vec::new())?;

    assert_eq!(written, 0);
    assert!(output.is_empty());
    Ok(())
}

#[test]
fn test_run_prints_extreme_values_in_decimal() -> Result<()> {
    let (_, output) = run_with_input(vec![i32::MIN, 0, i32::MAX, -10])?;

    assert_eq!(output, "-2147483648\n-10\n");
    Ok(())
}
