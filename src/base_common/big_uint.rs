/// Arbitrary-size unsigned integer, just wide enough for radix conversion.
///
/// Limbs are little-endian and the most significant limb is never zero, so zero has no limbs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BigUint {
    limbs: Vec<u32>,
}

impl BigUint {
    pub fn new() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Preallocates room for a value of up to `bytes` bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            limbs: Vec::with_capacity(bytes / 4 + 1),
        }
    }

    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs = Vec::with_capacity(bytes.len() / 4 + 1);
        for chunk in bytes.rchunks(4) {
            let limb = chunk.iter().fold(0u32, |limb, &byte| (limb << 8) | byte as u32);
            limbs.push(limb);
        }
        let mut value = Self { limbs };
        value.normalize();
        value
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// `self = self * multiplier + addend`
    pub fn mul_add_small(&mut self, multiplier: u32, addend: u32) {
        let mut carry = addend as u64;
        for limb in &mut self.limbs {
            carry += (*limb as u64) * (multiplier as u64);
            *limb = carry as u32;
            carry >>= 32;
        }
        if carry > 0 {
            self.limbs.push(carry as u32);
        }
        self.normalize();
    }

    /// Divides in place and returns the remainder.
    pub fn div_rem_small(&mut self, divisor: u32) -> u32 {
        assert!(divisor != 0, "division by zero");
        let divisor = divisor as u64;
        let mut remainder = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let value = (remainder << 32) | *limb as u64;
            *limb = (value / divisor) as u32;
            remainder = value % divisor;
        }
        self.normalize();
        remainder as u32
    }

    /// Appends the minimal big-endian representation to `output`; zero appends nothing.
    pub fn write_be_bytes(&self, output: &mut Vec<u8>) {
        let mut limbs = self.limbs.iter().rev();
        if let Some(high) = limbs.next() {
            let high = high.to_be_bytes();
            let skip = high.iter().take_while(|&&byte| byte == 0).count();
            output.extend_from_slice(&high[skip..]);
        }
        for limb in limbs {
            output.extend_from_slice(&limb.to_be_bytes());
        }
    }

    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut output = Vec::with_capacity(self.limbs.len() * 4);
        self.write_be_bytes(&mut output);
        output
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}
