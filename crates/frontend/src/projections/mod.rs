pub mod p900_planning_grid;
