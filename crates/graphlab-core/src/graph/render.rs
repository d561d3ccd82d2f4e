//! Text rendering of a graph's connections and matrices

use std::fmt::{self, Display, Write};

use super::{Graph, SquareMatrix};

impl<T> Graph<T> {
    fn write_connections(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str("Graph connections:\n")?;
        for vertex in &self.vertices {
            write!(out, "{}: ", vertex.id())?;
            let names: Vec<&str> = vertex
                .neighbors()
                .iter()
                .filter_map(|handle| self.index.id_of(handle.index()))
                .collect();
            out.write_str(&names.join(" "))?;
            out.write_char('\n')?;
        }
        Ok(())
    }

    fn write_matrix<V: Copy + Default + Display>(
        &self,
        out: &mut impl Write,
        title: &str,
        matrix: &SquareMatrix<V>,
    ) -> fmt::Result {
        write!(out, "{}:\n   ", title)?;
        let ids: Vec<&str> = self.index.iter().collect();
        for (position, id) in ids.iter().enumerate() {
            let separator = if position + 1 == ids.len() { "\n" } else { "  " };
            write!(out, "{}{}", id, separator)?;
        }

        for (id, row) in ids.iter().zip(matrix.rows()) {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(out, "{} [{}]", id, cells.join(", "))?;
        }
        Ok(())
    }
}

impl<T> Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_connections(f)?;
        f.write_char('\n')?;
        self.write_matrix(f, "AdjacencyMatrix", &self.adjacency)?;
        if let Some(weights) = &self.weights {
            f.write_char('\n')?;
            self.write_matrix(f, "WeightsMatrix", weights)?;
        }
        Ok(())
    }
}
