pub const NOZZLE_HELPER: &str = r#"
NOZZLE FLOW: one MacCormack predictor-corrector pass along a converging-diverging nozzle.

PARAMETERS (asked in this order)
  left boundary      first coordinate of the grid
  right boundary     the grid increment is right / (points - 1)
  grid points        number of grid points, at least 2
  diffusion coeff a  scales the stencil correction
  time step dt
  grid step dx

WHAT IS COMPUTED
  X        x_0 = left, x_i = x_{i-1} + right/(n-1)
  P, T     P = 1 - 0.3146 x,  T = 1 - 0.2314 x
  P*, T*   predictor  u*_i = u_i - a (dt/dx) (u_{i+1} - u_i)
  P', T'   corrector  u'_i = (u_i + u*_i)/2 - (a/2)(dt/dx)(u*_{i+1} - u*_{i-1})
  V        V = (0.1 + 1.09 x) * sqrt(T')
  The first and the last grid point are boundary conditions and are never recomputed.

NOTES
  - With a left boundary other than 0 the last grid point is left + right.
  - A large a*dt/dx can make T' negative. V is then printed as NaN; this is a
    limitation of the model, not a program error.

TASK FILES
  Menu item "Generate template" writes nozzle_task.json:
  {
    "left_boundary": 0.0,
    "right_boundary": 1.0,
    "grid_point_count": 5,
    "diffusion_coeff": 0.5,
    "time_step": 0.01,
    "grid_step": 0.25
  }
  Run it with: nozzle_flow nozzle_task.json

LOGGING
  Set NOZZLE_LOG=off|error|warn|info|debug|trace to change the log level (default warn).
  Set NOZZLE_LOG_FILE=<path> to also write the log to a file.
"#;
