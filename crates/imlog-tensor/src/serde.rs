use crate::{dtype::TensorBuffer, DynTensor};

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl serde::Serialize for DynTensor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("DynTensor", 2)?;
        state.serialize_field("shape", &self.shape)?;
        state.serialize_field("data", &self.buffer)?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for DynTensor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct TensorData {
            shape: Vec<usize>,
            data: TensorBuffer,
        }

        let TensorData { shape, data } = TensorData::deserialize(deserializer)?;

        DynTensor::from_buffer(shape, data).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{DType, DynTensor, NestedArray};

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let tensor = DynTensor::from_shape_vec([2, 3], vec![1u8, 2, 3, 4, 5, 6])?;
        let serialized = serde_json::to_string(&tensor)?;
        assert_eq!(serialized, r#"{"shape":[2,3],"data":{"u8":[1,2,3,4,5,6]}}"#);
        let deserialized: DynTensor = serde_json::from_str(&serialized)?;
        assert_eq!(tensor, deserialized);
        Ok(())
    }

    #[test]
    fn test_serde_shape_mismatch() {
        let res = serde_json::from_str::<DynTensor>(r#"{"shape":[2,2],"data":{"u16":[1,2]}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_serde_shape_overflow() {
        let res = serde_json::from_str::<DynTensor>(
            r#"{"shape":[8589934592,8589934592,4],"data":{"u8":[]}}"#,
        );
        let err = match res {
            Ok(tensor) => panic!("expected an overflow error, got {:?}", tensor.shape()),
            Err(err) => err,
        };
        assert!(err.to_string().contains("Shape overflow"));
    }

    #[test]
    fn test_nested_from_json() -> Result<(), Box<dyn std::error::Error>> {
        let nested: NestedArray = serde_json::from_str("[[1, 2], [3, 4]]")?;
        let tensor = nested.to_tensor(DType::U16)?;
        assert_eq!(tensor.shape(), &[2, 2]);
        assert_eq!(tensor.get::<u16>(&[1, 1]), Some(&4));
        Ok(())
    }
}
