use primitives::bytes::Bytes;
use std::io;

pub fn serialize<T>(t: &T) -> Bytes
where
	T: Serializable,
{
	let mut stream = Stream::default();
	stream.append(t);
	stream.out()
}

pub fn serialize_list<T>(t: &[T]) -> Bytes
where
	T: Serializable,
{
	let mut stream = Stream::default();
	stream.append_list(t);
	stream.out()
}

pub trait Serializable {
	/// Serialize the struct and appends it to the end of stream.
	fn serialize(&self, stream: &mut Stream);

	/// Hint about the size of serialized struct.
	fn serialized_size(&self) -> usize
	where
		Self: Sized,
	{
		0
	}
}

/// Small helper to write Bitcoin-like serialized structures.
#[derive(Default)]
pub struct Stream {
	buffer: Vec<u8>,
}

impl io::Write for Stream {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.buffer.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl Stream {
	/// Serializes the struct and appends it to the end of stream.
	pub fn append<T>(&mut self, t: &T) -> &mut Self
	where
		T: Serializable,
	{
		t.serialize(self);
		self
	}

	/// Appends raw bytes to the end of the stream.
	pub fn append_slice(&mut self, bytes: &[u8]) -> &mut Self {
		self.buffer.extend_from_slice(bytes);
		self
	}

	/// Serializes a list of structs, length-prefixed by a `CompactInteger`.
	pub fn append_list<T>(&mut self, t: &[T]) -> &mut Self
	where
		T: Serializable,
	{
		self.append(&crate::CompactInteger::from(t.len()));
		for i in t.iter() {
			self.append(i);
		}
		self
	}

	/// Returns the accumulated bytes.
	pub fn out(self) -> Bytes {
		self.buffer.into()
	}
}
