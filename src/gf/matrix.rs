use super::field::Field;

/// Fixed-size matrix of field elements. Arithmetic is performed in whichever [Field] is
/// passed to [multiply](Matrix::multiply) and [add](Matrix::add).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Matrix<const R: usize, const C: usize> {
    elems: [[u8; C]; R],
}

/// Column vector, a single-column [Matrix].
pub type Vector<const N: usize> = Matrix<N, 1>;

impl<const R: usize, const C: usize> Matrix<R, C> {
    pub const fn zero() -> Self {
        Self {
            elems: [[0u8; C]; R],
        }
    }

    pub const fn from_rows(rows: [[u8; C]; R]) -> Self {
        Self { elems: rows }
    }

    /// Builds a matrix by evaluating `f(row, col)` for every element.
    pub fn from_fn(f: impl Fn(usize, usize) -> u8) -> Self {
        let mut m = Self::zero();
        for (r, row) in m.elems.iter_mut().enumerate() {
            for (c, elem) in row.iter_mut().enumerate() {
                *elem = f(r, c);
            }
        }
        m
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.elems[row][col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.elems[row][col] = value;
    }

    /// Matrix product `self * rhs`, where `result[i][k] = Σ_j self[i][j] * rhs[j][k]` in `field`.
    pub fn multiply<F: Field, const K: usize>(&self, field: &F, rhs: &Matrix<C, K>) -> Matrix<R, K> {
        let mut out = Matrix::<R, K>::zero();
        for i in 0..R {
            for k in 0..K {
                let mut acc = 0u8;
                for j in 0..C {
                    acc = field.add(acc, field.multiply(self.elems[i][j], rhs.elems[j][k]));
                }
                out.elems[i][k] = acc;
            }
        }
        out
    }

    /// Element-wise sum in `field`.
    pub fn add<F: Field>(&self, field: &F, rhs: &Self) -> Self {
        Self::from_fn(|r, c| field.add(self.elems[r][c], rhs.elems[r][c]))
    }
}

impl<const N: usize> Matrix<N, 1> {
    pub fn from_column(column: [u8; N]) -> Self {
        Self::from_fn(|r, _| column[r])
    }

    pub fn into_column(self) -> [u8; N] {
        self.elems.map(|[e]| e)
    }
}

impl Matrix<8, 1> {
    /// Bit-vector of a byte, element `i` holding bit `i` (least significant first).
    pub fn from_bits(byte: u8) -> Self {
        Self::from_fn(|r, _| (byte >> r) & 1)
    }

    /// Inverse of [from_bits](Matrix::from_bits). Only the low bit of each element is used.
    pub fn to_bits(&self) -> u8 {
        self.elems
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, [bit])| acc | ((bit & 1) << i))
    }
}
