#[macro_export]
macro_rules! impl_ser_for_array {
	($name: ident, $size: expr) => {
		impl Serializable for $name {
			fn serialize(&self, stream: &mut Stream) {
				stream.append_slice(&**self);
			}

			#[inline]
			fn serialized_size(&self) -> usize {
				$size
			}
		}

		impl Deserializable for $name {
			fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error>
			where
				T: std::io::Read,
			{
				let mut result = Self::default();
				reader.read_slice(&mut *result)?;
				Ok(result)
			}
		}
	};
}

#[macro_export]
macro_rules! impl_ser_for_hash {
	($name: ident, $size: expr) => {
		impl Serializable for $name {
			fn serialize(&self, stream: &mut Stream) {
				// caller brings `bitcrypto::Hash` into scope for `as_inner`/`from_inner`
				stream.append_slice(&self.as_inner()[..]);
			}

			#[inline]
			fn serialized_size(&self) -> usize {
				$size
			}
		}

		impl Deserializable for $name {
			fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error>
			where
				T: io::Read,
			{
				let mut s = [0u8; $size];
				reader.read_slice(&mut s)?;
				Ok($name::from_inner(s))
			}
		}
	};
}
