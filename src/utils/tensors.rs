use burn::tensor::{backend::Backend, Data, ElementConversion, Int, Shape, Tensor};

/// Stack equal-length rows of ids into a `[rows, seq_length]` int tensor
pub fn stack_rows<'a, B, I>(rows: I, seq_length: usize, device: &B::Device) -> Tensor<B, 2, Int>
where
    B: Backend,
    I: IntoIterator<Item = &'a Vec<usize>>,
{
    let values: Vec<B::IntElem> = rows
        .into_iter()
        .flat_map(|row| row.iter().map(|&e| (e as i64).elem()))
        .collect();

    let batch_size = values.len() / seq_length.max(1);
    let data: Data<B::IntElem, 2> = Data::new(values, Shape::new([batch_size, seq_length]));

    Tensor::from_data(data, device)
}

/// Build a 1D int tensor of class ids
pub fn class_ids<B: Backend>(ids: &[usize], device: &B::Device) -> Tensor<B, 1, Int> {
    let values: Vec<B::IntElem> = ids.iter().map(|&id| (id as i64).elem()).collect();
    let data: Data<B::IntElem, 1> = Data::new(values, Shape::new([ids.len()]));

    Tensor::from_data(data, device)
}

/// Read a 1D or `[batch, 1]` int tensor back into class ids
pub fn to_class_ids<B: Backend, const D: usize>(tensor: Tensor<B, D, Int>) -> Vec<usize> {
    tensor
        .into_data()
        .convert::<i64>()
        .value
        .into_iter()
        .map(|id| id as usize)
        .collect()
}
