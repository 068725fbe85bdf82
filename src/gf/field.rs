/// Reducing polynomial of the AES field, `x^8 + x^4 + x^3 + x + 1` (0x11B).
pub const AES_MODULUS: u16 = 283;

/// Addition and multiplication over a finite field whose elements fit in a byte.
pub trait Field {
    fn add(&self, a: u8, b: u8) -> u8;
    fn multiply(&self, a: u8, b: u8) -> u8;
}

/// The binary field GF(2). Only the low bit of each element is significant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Gf2;

impl Field for Gf2 {
    #[inline(always)]
    fn add(&self, a: u8, b: u8) -> u8 {
        (a ^ b) & 1
    }

    #[inline(always)]
    fn multiply(&self, a: u8, b: u8) -> u8 {
        a & b & 1
    }
}

/// The binary extension field GF(2^n), n <= 8, defined by a reducing polynomial.
///
/// The polynomial is encoded as an integer whose bit `i` is the coefficient of `x^i`, so the
/// AES polynomial `x^8 + x^4 + x^3 + x + 1` is `0b1_0001_1011` = 283.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Gf2n {
    modulus: u16,
    degree: u32,
}

impl Gf2n {
    /// GF(2^8) with the AES reducing polynomial.
    pub const AES: Gf2n = Gf2n {
        modulus: AES_MODULUS,
        degree: 8,
    };

    /// Builds a field from its reducing polynomial. Returns `None` unless the polynomial has
    /// degree 1 to 8. Irreducibility is not checked.
    pub const fn new(modulus: u16) -> Option<Self> {
        if modulus < 2 {
            return None;
        }
        let degree = 15 - modulus.leading_zeros();
        if degree > 8 {
            return None;
        }
        Some(Self { modulus, degree })
    }

    pub fn modulus(&self) -> u16 {
        self.modulus
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    #[inline(always)]
    fn mask(&self) -> u16 {
        (1u16 << self.degree) - 1
    }

    /// Field addition (bitwise XOR of coefficients).
    #[inline(always)]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        ((a ^ b) as u16 & self.mask()) as u8
    }

    /// Polynomial multiplication reduced modulo the field polynomial.
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        let top = 1u16 << self.degree;
        let mut a = a as u16 & self.mask();
        let mut b = b as u16 & self.mask();
        let mut product = 0u16;

        while b != 0 {
            if b & 1 == 1 {
                product ^= a;
            }
            b >>= 1;
            a <<= 1;
            if a & top != 0 {
                a ^= self.modulus;
            }
        }

        product as u8
    }

    /// Raises `base` to `exponent` by square-and-multiply. `power(x, 0) == 1`.
    pub fn power(&self, base: u8, exponent: u32) -> u8 {
        let mut result = 1u8;
        let mut square = base;
        let mut e = exponent;

        while e != 0 {
            if e & 1 == 1 {
                result = self.multiply(result, square);
            }
            square = self.multiply(square, square);
            e >>= 1;
        }

        result
    }

    /// Multiplicative inverse, computed as `a^(2^n - 2)`. Zero has no inverse.
    pub fn invert(&self, a: u8) -> Option<u8> {
        if a as u16 & self.mask() == 0 {
            return None;
        }
        Some(self.power(a, (1u32 << self.degree) - 2))
    }
}

impl Field for Gf2n {
    #[inline(always)]
    fn add(&self, a: u8, b: u8) -> u8 {
        Gf2n::add(self, a, b)
    }

    #[inline(always)]
    fn multiply(&self, a: u8, b: u8) -> u8 {
        Gf2n::multiply(self, a, b)
    }
}
