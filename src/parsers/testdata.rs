//! 测试用 aims.out 片段

/// 硅原胞两步结构优化（含 geometry.in 回显、更新结构与最终结构）
pub const SI_RELAXATION_OUT: &str = r#"
  Invoking FHI-aims ...
  | Number of species                 :        1
  | Number of atoms                   :        2
  | Number of lattice vectors         :        3

  Parsing geometry.in (first pass over file, find array dimensions only).
  The contents of geometry.in will be repeated verbatim below
  unless switched off by setting 'verbatim_writeout .false.' .
  ------------------------------------------------------------
  lattice_vector   0.00000000   2.71500000   2.71500000
  lattice_vector   2.71500000   0.00000000   2.71500000
  lattice_vector   2.71500000   2.71500000   0.00000000
  atom   0.00000000   0.00000000   0.00000000  Si
  atom   1.35750000   1.35750000   1.35750000  Si
  ------------------------------------------------------------

  Input geometry:
  | Unit cell:
  |        0.00000000        2.71500000        2.71500000
  |        2.71500000        0.00000000        2.71500000
  |        2.71500000        2.71500000        0.00000000
  | Atomic structure:
  |       Atom                x [A]            y [A]            z [A]
  |    1: Species Si            0.00000000        0.00000000        0.00000000
  |    2: Species Si            1.35750000        1.35750000        1.35750000

  | Total energy corrected        :         -15783.40000000 eV

  Total atomic forces (unitary forces cleaned) [eV/Ang]:
  |    1         -0.100000000000000E+00          0.000000000000000E+00          0.000000000000000E+00
  |    2          0.100000000000000E+00          0.000000000000000E+00          0.000000000000000E+00

  Updated atomic structure:
                         x [A]             y [A]             z [A]
  lattice_vector         0.00000000        2.72000000        2.72000000
  lattice_vector         2.72000000        0.00000000        2.72000000
  lattice_vector         2.72000000        2.72000000        0.00000000

            atom         0.00000000        0.00000000        0.00000000  Si
            atom         1.36000000        1.36000000        1.36000000  Si

  | Total energy corrected        :         -15783.50000000 eV

  Total atomic forces (unitary forces cleaned) [eV/Ang]:
  |    1         -0.100000000000000E-01          0.000000000000000E+00          0.000000000000000E+00
  |    2          0.100000000000000E-01          0.000000000000000E+00          0.000000000000000E+00

  Present geometry is converged.

  Final atomic structure:
                         x [A]             y [A]             z [A]
  lattice_vector         0.00000000        2.72000000        2.72000000
  lattice_vector         2.72000000        0.00000000        2.72000000
  lattice_vector         2.72000000        2.72000000        0.00000000

            atom         0.00000000        0.00000000        0.00000000  Si
            atom         1.36000000        1.36000000        1.36000000  Si

  Have a nice day.
"#;

/// 水分子单点 DFPT 极化率计算
pub const H2O_POLARIZABILITY_OUT: &str = r#"
  Invoking FHI-aims ...
  | Number of species                 :        2
  | Number of atoms                   :        3

  ------------------------------------------------------------
  atom   0.00000000   0.00000000   0.11730000  O
  atom   0.00000000   0.75720000  -0.46920000  H
  atom   0.00000000  -0.75720000  -0.46920000  H
  ------------------------------------------------------------

  | Total energy corrected        :          -2080.12345678 eV
  | Total dipole moment [eAng]          :          0.00000000          0.00000000          0.38000000

  Polarizability (Bohr^3) :
      8.91000000      0.00000000      0.00000000
      0.00000000      9.67000000      0.00000000
      0.00000000      0.00000000      8.52000000

  Have a nice day.
"#;

/// 无极化率的单点计算
pub const H2_SINGLE_POINT_OUT: &str = r#"
  | Number of atoms                   :        2
  ------------------------------------------------------------
  atom   0.00000000   0.00000000   0.00000000  H
  atom   0.00000000   0.00000000   0.74000000  H
  ------------------------------------------------------------
  | Total energy corrected        :            -31.71234567 eV
  Have a nice day.
"#;
