use imlog_tensor::{analyze, squeeze, DType, DynTensor, TensorError};

fn shapes() -> Vec<Vec<usize>> {
    vec![
        vec![],
        vec![1],
        vec![5],
        vec![4, 4],
        vec![4, 4, 1],
        vec![1, 4, 4],
        vec![4, 1, 4],
        vec![4, 4, 3],
        vec![1, 4, 4, 1],
        vec![2, 3, 4, 5],
        vec![1, 1, 1],
        vec![0, 3],
    ]
}

#[test]
fn non_trivial_dims_exclude_only_singletons() {
    for shape in shapes() {
        let facts = analyze(&shape);
        assert_eq!(facts.rank, shape.len());
        assert!(facts.non_trivial_dims.iter().all(|&d| d != 1));
        assert_eq!(
            facts.non_trivial_rank(),
            shape.iter().filter(|&&d| d != 1).count()
        );
    }
}

#[test]
fn squeeze_matches_non_trivial_dims() -> Result<(), TensorError> {
    for shape in shapes() {
        let numel = shape.iter().product::<usize>();
        let tensor = DynTensor::zeros(shape.clone(), DType::U8)?;
        assert_eq!(tensor.numel(), numel);

        let facts = analyze(&shape);
        let squeezed = squeeze(tensor, &facts);
        assert_eq!(squeezed.shape(), facts.non_trivial_dims.as_slice());
        assert_eq!(squeezed.numel(), numel);

        // squeezing twice changes nothing
        let again = squeezed.clone().squeeze();
        assert_eq!(again, squeezed);
    }
    Ok(())
}

#[test]
fn squeeze_preserves_values() -> Result<(), TensorError> {
    let data: Vec<f64> = (0..12).map(|x| x as f64 * 0.5).collect();
    let tensor = DynTensor::from_shape_vec([3, 1, 4], data.clone())?;
    let squeezed = tensor.squeeze();
    assert_eq!(squeezed.shape(), &[3, 4]);
    assert_eq!(squeezed.as_slice::<f64>(), Some(data.as_slice()));
    approx::assert_relative_eq!(*squeezed.get::<f64>(&[2, 3]).unwrap_or(&0.0), 5.5);
    Ok(())
}
