// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Registry façades for the matrix value types.
//!
//! Matrices are stored cell-wise in a sequential pool, so `cell`/
//! `const_cell` touch one element of one matrix without copying the rest.

use crate::math::{Mat2, Mat4};

matrix_registry!(
    /// Pooled storage for [`Mat2`] values (4 cells per slot).
    Mat2Registry, Mat2, Mat2Handle, 2, 4
);

matrix_registry!(
    /// Pooled storage for [`Mat4`] values (16 cells per slot).
    Mat4Registry, Mat4, Mat4Handle, 4, 16
);
