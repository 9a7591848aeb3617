// Channel layouts:
// RGB565 - RRRRRGGG GGGBBBBB
// 3-bit  - 00000RGB

pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
	// Keep the top 5/6/5 bits of each channel
	return ((r as u16) & 0xF8) << 8 | ((g as u16) & 0xFC) << 3 | ((b as u16) >> 3);
}


pub fn rgb565_to_rgb888(pixel: u16) -> (u8, u8, u8) {
	// Truncated low bits come back as zeroes, not replicated high bits
	let r: u8 = (((pixel >> 11) & 0x1F) << 3) as u8;
	let g: u8 = (((pixel >> 5) & 0x3F) << 2) as u8;
	let b: u8 = ((pixel & 0x1F) << 3) as u8;

	return (r, g, b);
}


/// Bit-extraction reducer: the top bit of each unpacked RGB565 field.
pub fn rgb565_to_rgb3bit(pixel: u16) -> u8 {
	let r: u16 = (pixel >> 11) & 0x1F;
	let g: u16 = (pixel >> 5) & 0x3F;
	let b: u16 = pixel & 0x1F;

	return (((r >> 4) & 0x1) << 2 | ((g >> 5) & 0x1) << 1 | (b >> 4) & 0x1) as u8;
}


/// Threshold reducer: a channel is lit when it is above 127.
pub fn rgb888_to_3bit_threshold(r: u8, g: u8, b: u8) -> u8 {
	let r_bit: u8 = (r > 127) as u8;
	let g_bit: u8 = (g > 127) as u8;
	let b_bit: u8 = (b > 127) as u8;

	return (r_bit << 2) | (g_bit << 1) | b_bit;
}
