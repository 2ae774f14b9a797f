use bit_buffer::{BitBuffer, BitBufferError};

fn main() {
    println!("=== Bit Buffer Examples ===\n");

    // Example 1: A compact header with odd-width fields
    let _ = example_packed_header();

    // Example 2: Flag packs
    let _ = example_flags();

    // Example 3: Splicing and slicing
    let _ = example_splice();

    // Example 4: Memory comparison
    example_memory_savings();
}

fn example_packed_header() -> Result<(), BitBufferError> {
    println!("Example 1: Packing a 3/5/12-bit header");

    let mut header = BitBuffer::new();
    header.append_bits_u8(0b101, 3)?; // version
    header.append_bits_u8(17, 5)?; // message type
    header.append_bits_u16(0xABC, 12)?; // payload length

    println!("  Bits:    {}", header);
    println!("  Bytes:   {:02X?}", header.to_bytes());
    println!("  Padding: {}", header.padding_bits());
    println!("  Version: {}", header.extract_integer(0, 3)?);
    println!("  Type:    {}", header.extract_integer(3, 8)?);
    println!("  Length:  {:#X}", header.extract_integer(8, 20)?);
    println!();

    Ok(())
}

fn example_flags() -> Result<(), BitBufferError> {
    println!("Example 2: Feature flags");

    const NAMES: [&str; 4] = ["compress", "encrypt", "sign", "stream"];

    let mut flags: BitBuffer = "0000".parse()?;
    flags.set_bit(0)?;
    flags.set_bit(2)?;
    flags.toggle_bit(3)?;
    flags.clear_bit(3)?;

    for (name, enabled) in NAMES.iter().zip(flags.iter()) {
        println!("  {:<9} {}", name, enabled);
    }
    println!();

    Ok(())
}

fn example_splice() -> Result<(), BitBufferError> {
    println!("Example 3: Splicing buffers");

    let mut left: BitBuffer = "11011".parse()?;
    let right = BitBuffer::from_bytes(&[0xC0, 0xFF, 0xEE], 4)?;
    left.append_bit_buffer(&right);

    let middle = left.extract_bit_buffer(5, 17)?;
    println!("  Joined:  {} ({} bits)", left, left.len());
    println!("  Middle:  {} -> {:02X?}", middle, middle.to_bytes());
    println!();

    Ok(())
}

fn example_memory_savings() {
    println!("Example 4: Memory savings comparison");

    let count = 10_000;

    // one bool per byte
    let standard_bytes = count;

    let packed: BitBuffer = (0..count).map(|i| i % 3 == 0).collect();
    let packed_bytes = packed.byte_len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} flags:", count);
    println!("  Vec<bool>: {} bytes", standard_bytes);
    println!("  Packed:    {} bytes", packed_bytes);
    println!("  Savings:   {:.1}%", savings);
}
